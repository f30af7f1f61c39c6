//! Interactive intake: collects and normalizes a `LetterRequest` from
//! line-based prompts. Invalid selector answers are re-asked here; nothing
//! downstream ever prompts.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::errors::LetterError;
use crate::models::{Honorific, LetterRequest, Recipient};
use crate::templates::{self, IndustryField};
use crate::text::{is_blank, title_case};

pub struct Intake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the full question sequence.
    pub fn collect_request(&mut self) -> Result<LetterRequest, LetterError> {
        let company = title_case(&self.ask("Company Name:  ")?);
        let company_genre = self.ask("Company Genre: e.g (recruitment agency):  ")?;
        let company_description =
            self.ask("Company Description: e.g. (A leader of cloud storage in Australia):  ")?;
        let company_mission =
            self.ask("Company's Mission e.g. (deliver viable solutions for digital storage):  ")?;
        let business_address_line_1 = title_case(&self.ask("Business Address, Line 1:  ")?);
        let business_address_line_2 = title_case(&self.ask("Business Address, Line 2:  ")?);
        let position = title_case(&self.ask("Job Position:  ")?);

        let recipient = if self.ask_until("Add Recipient? (y)=YES, (n)=NO:  ", parse_yes_no)? {
            Some(self.collect_recipient()?)
        } else {
            None
        };

        let field: IndustryField =
            self.ask_until("Industry Field (data, dev, sci):  ", templates::lookup)?;

        Ok(LetterRequest {
            company,
            company_genre,
            company_description,
            company_mission,
            business_address_line_1,
            business_address_line_2,
            position,
            recipient,
            field,
        })
    }

    fn collect_recipient(&mut self) -> Result<Recipient, LetterError> {
        let title: Honorific =
            self.ask_until("Recipients Title (mr, mrs, ms, dr):  ", str::parse)?;
        let first = self.ask_until("First name of Recipient:  ", non_blank_title)?;
        let last = self.ask_until("Last name of Recipient:  ", non_blank_title)?;
        let position = self.ask_until("Position of Recipient:  ", non_blank_title)?;
        Recipient::new(title, first, last, position)
    }

    /// Prints `prompt` and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String, LetterError> {
        write!(self.output, "{prompt}").map_err(input_error)?;
        self.output.flush().map_err(input_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(input_error)?;
        if read == 0 {
            return Err(LetterError::Input(
                "input closed before the letter was complete".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Re-asks `prompt` until `parse` accepts the answer.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, LetterError>,
    ) -> Result<T, LetterError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected answer {answer:?}: {e}");
                    writeln!(self.output, "{e}").map_err(input_error)?;
                }
            }
        }
    }
}

fn input_error(e: std::io::Error) -> LetterError {
    LetterError::Input(e.to_string())
}

fn parse_yes_no(answer: &str) -> Result<bool, LetterError> {
    match answer.to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(LetterError::InvalidRequest("please answer y or n".to_string())),
    }
}

fn non_blank_title(answer: &str) -> Result<String, LetterError> {
    if is_blank(answer) {
        Err(LetterError::InvalidRequest("a value is required".to_string()))
    } else {
        Ok(title_case(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Result<LetterRequest, LetterError>, String) {
        let mut output = Vec::new();
        let result = Intake::new(script.as_bytes(), &mut output).collect_request();
        (result, String::from_utf8(output).unwrap())
    }

    const COMPANY_ANSWERS: &str = "acme corp\n recruitment agency \nA leader of cloud storage\n\
                                   deliver viable solutions\n1 market st\nsydney nsw\njunior analyst\n";

    #[test]
    fn test_collects_request_without_recipient() {
        let script = format!("{COMPANY_ANSWERS}n\ndev\n");
        let (result, _) = run(&script);
        let request = result.unwrap();
        assert_eq!(request.company, "Acme Corp");
        assert_eq!(request.company_genre, "recruitment agency");
        assert_eq!(request.business_address_line_2, "Sydney Nsw");
        assert_eq!(request.position, "Junior Analyst");
        assert_eq!(request.recipient, None);
        assert_eq!(request.field, IndustryField::Dev);
    }

    #[test]
    fn test_collects_recipient_with_normalization() {
        let script = format!("{COMPANY_ANSWERS}y\nMR\njohn\nsmith\nhiring manager\nsci\n");
        let (result, _) = run(&script);
        let recipient = result.unwrap().recipient.unwrap();
        assert_eq!(recipient.address_line(), "Mr. John Smith, Hiring Manager");
    }

    #[test]
    fn test_reprompts_on_invalid_selectors() {
        let script = format!("{COMPANY_ANSWERS}maybe\ny\nsir\ndr\n\njane\nroe\ncfo\nops\nDATA\n");
        let (result, output) = run(&script);
        let request = result.unwrap();
        assert_eq!(request.field, IndustryField::Data);
        assert_eq!(request.recipient.unwrap().salutation(), "Dear Dr. Roe,");
        assert_eq!(output.matches("Add Recipient?").count(), 2);
        assert_eq!(output.matches("Recipients Title").count(), 2);
        assert_eq!(output.matches("First name of Recipient").count(), 2);
        assert_eq!(output.matches("Industry Field").count(), 2);
        assert!(output.contains("Invalid industry field 'ops'"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run("acme\n");
        assert!(matches!(result, Err(LetterError::Input(_))));
    }
}
