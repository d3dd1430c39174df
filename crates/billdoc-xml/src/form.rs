//! The `form` block: distribution metadata and legislative actions

use std::io::BufRead;

use billdoc_ast::{Action, ActionDate, AssociatedDoc, Form};

use crate::attrs::Attributes;
use crate::error::{BillError, Result};
use crate::inline::read_markup;
use crate::reader::{EventReader, StartTag, Token};
use crate::FromElement;

pub(crate) fn decode_form<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Form> {
    let mut form = Form::default();

    loop {
        let child = match reader.next_token()? {
            Token::Start(child) => child,
            Token::Text(_) => continue,
            Token::End => return Ok(form),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        };

        let name = child.name.as_str();
        match child.local_name() {
            "distribution-code" => form.distribution_code = Some(reader.read_text(name)?),
            "calendar" => form.calendar = Some(reader.read_text(name)?),
            "congress" => form.congress = Some(reader.read_text(name)?),
            "session" => form.session = Some(reader.read_text(name)?),
            "enrolled-dateline" => form.enrolled_dateline = Some(reader.read_text(name)?),
            "legis-num" => form.legis_num = Some(reader.read_text(name)?),
            "current-chamber" => form.current_chamber = Some(reader.read_text(name)?),
            "legis-type" => form.legis_type = Some(reader.read_text(name)?),
            "associated-doc" => form.associated_docs.push(AssociatedDoc {
                role: Attributes::of(&child).take("role"),
                text: reader.read_text(name)?,
            }),
            "action" => form.actions.push(decode_action(reader, &child)?),
            _ => reader.skip_element(name)?,
        }
    }
}

fn decode_action<R: BufRead>(reader: &mut EventReader<R>, tag: &StartTag) -> Result<Action> {
    let mut action = Action {
        stage: Attributes::of(tag).take("stage"),
        ..Default::default()
    };

    loop {
        match reader.next_token()? {
            Token::Start(child) => match child.local_name() {
                "action-date" => action.date = Some(decode_action_date(reader, &child)?),
                "action-desc" => action.descriptions.push(read_markup(reader, &child.name)?),
                "action-instruction" => action.instructions.push(reader.read_text(&child.name)?),
                _ => reader.skip_element(&child.name)?,
            },
            Token::Text(_) => {}
            Token::End => return Ok(action),
            Token::Eof => return Err(BillError::eof(&tag.name)),
        }
    }
}

fn decode_action_date<R: BufRead>(
    reader: &mut EventReader<R>,
    tag: &StartTag,
) -> Result<ActionDate> {
    let mut attrs = Attributes::of(tag);
    let event_date = attrs.take_date("date")?;
    let legislative_date = attrs.take_date("legis-day")?;
    Ok(ActionDate {
        human_readable: reader.read_text(&tag.name)?,
        event_date,
        legislative_date,
    })
}

impl FromElement for Form {
    fn from_element<R: BufRead>(reader: &mut EventReader<R>, start: &StartTag) -> Result<Self> {
        decode_form(reader, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;
    use billdoc_ast::{Date, Inline};

    const FORM: &str = r#"<form>
  <distribution-code display="yes">II</distribution-code>
  <congress>115th CONGRESS</congress>
  <session>1st Session</session>
  <legis-num>S. 1804</legis-num>
  <associated-doc role="companion">H. R. 676</associated-doc>
  <current-chamber>IN THE SENATE OF THE UNITED STATES</current-chamber>
  <action>
    <action-date date="20170913">September 13, 2017</action-date>
    <action-desc><sponsor name-id="S000033">Mr. Sanders</sponsor> (for himself and <cosponsor name-id="W000817">Ms. Warren</cosponsor>) introduced the following bill</action-desc>
    <action-instruction>Read twice and referred</action-instruction>
  </action>
  <legis-type>A BILL</legis-type>
  <official-title>To establish a Medicare-for-all program.</official-title>
</form>"#;

    #[test]
    fn test_form_fields() {
        let form: Form = from_slice(FORM.as_bytes()).unwrap();
        assert_eq!(form.distribution_code.as_deref(), Some("II"));
        assert_eq!(form.congress.as_deref(), Some("115th CONGRESS"));
        assert_eq!(form.session.as_deref(), Some("1st Session"));
        assert_eq!(form.legis_num.as_deref(), Some("S. 1804"));
        assert_eq!(form.legis_type.as_deref(), Some("A BILL"));
        assert!(form.calendar.is_none());
        assert_eq!(form.associated_docs[0].role.as_deref(), Some("companion"));
        assert_eq!(form.associated_docs[0].text, "H. R. 676");
    }

    #[test]
    fn test_action() {
        let form: Form = from_slice(FORM.as_bytes()).unwrap();
        let action = &form.actions[0];
        let date = action.date.as_ref().unwrap();
        assert_eq!(date.human_readable, "September 13, 2017");
        assert_eq!(
            date.event_date,
            Some(Date {
                year: 2017,
                month: 9,
                day: 13
            })
        );
        assert!(date.legislative_date.is_none());
        assert_eq!(action.instructions, vec!["Read twice and referred"]);

        let description = &action.descriptions[0];
        assert!(matches!(description[0], Inline::Sponsor(_)));
        assert!(description.iter().any(|n| matches!(n, Inline::Cosponsor(_))));
    }

    #[test]
    fn test_malformed_action_date_aborts() {
        let err = from_slice::<Form>(
            br#"<form><action><action-date date="2017913">x</action-date></action></form>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BillError::MalformedAttribute { ref attribute, .. } if attribute == "date"
        ));
    }
}
