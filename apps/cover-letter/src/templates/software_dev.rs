use crate::models::LetterRequest;
use crate::templates::{as_sentence, genre_clause, mission_phrase, CoverLetterTemplate};

/// Software development roles.
pub struct SoftwareDev<'a> {
    request: &'a LetterRequest,
}

impl<'a> SoftwareDev<'a> {
    pub fn new(request: &'a LetterRequest) -> Self {
        Self { request }
    }

    fn opening(&self) -> String {
        let r = self.request;
        format!(
            "I am excited to apply for the {} position at {}{}. I enjoy turning loosely \
             defined problems into software that is simple to use and easy to maintain, and \
             I would love to bring that habit to your engineering team.",
            r.position,
            r.company,
            genre_clause(&r.company_genre)
        )
    }

    fn company(&self) -> String {
        let r = self.request;
        let reason = format!(
            "What draws me to {} is the chance to ship work that real users depend on, \
             alongside engineers who care about doing it well.",
            r.company
        );
        match as_sentence(&r.company_description) {
            Some(description) => format!("{description} {reason}"),
            None => reason,
        }
    }

    fn experience(&self) -> String {
        "I have built web services and command line tools in Rust, Python and TypeScript, \
         designed relational schemas and written the automated tests that keep them honest. \
         I am at home with Git, code review and continuous integration."
            .to_string()
    }

    fn teamwork(&self) -> String {
        "I communicate clearly with non-technical colleagues, document what I build and \
         treat feedback as the fastest way to get better. I am comfortable picking up an \
         unfamiliar codebase and becoming productive in it quickly."
            .to_string()
    }

    fn mission(&self) -> Option<String> {
        let r = self.request;
        mission_phrase(&r.company_mission).map(|mission| {
            format!(
                "Your mission to {mission} resonates with me, and I would be proud to write \
                 the software that helps {} get there.",
                r.company
            )
        })
    }

    fn closing(&self) -> String {
        format!(
            "Thank you for taking the time to review my application. I would welcome the \
             opportunity to talk about the {} role and how I can contribute to {}.",
            self.request.position, self.request.company
        )
    }
}

impl CoverLetterTemplate for SoftwareDev<'_> {
    fn name(&self) -> &'static str {
        "SoftwareDev"
    }

    fn paragraph(&self, index: usize) -> Option<String> {
        match index {
            1 => Some(self.opening()),
            2 => Some(self.company()),
            3 => Some(self.experience()),
            4 => Some(self.teamwork()),
            5 => self.mission(),
            6 => Some(self.closing()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::tests::sample_request;
    use crate::templates::IndustryField;

    #[test]
    fn test_six_paragraphs_with_mission() {
        let request = sample_request(IndustryField::Dev, None);
        assert_eq!(SoftwareDev::new(&request).paragraphs().len(), 6);
    }

    #[test]
    fn test_mission_slot_absent_when_blank() {
        let mut request = sample_request(IndustryField::Dev, None);
        request.company_mission.clear();
        let template = SoftwareDev::new(&request);
        assert_eq!(template.paragraph(5), None);
        assert!(template.paragraph(6).is_some(), "closing must survive");
    }

    #[test]
    fn test_mission_phrase_inserted() {
        let request = sample_request(IndustryField::Dev, None);
        let p = SoftwareDev::new(&request).paragraph(5).unwrap();
        assert!(p.starts_with("Your mission to move goods with less waste"), "got: {p}");
    }
}
