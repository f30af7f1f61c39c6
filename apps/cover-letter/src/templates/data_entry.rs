use crate::models::LetterRequest;
use crate::templates::{as_sentence, genre_clause, mission_phrase, CoverLetterTemplate};

/// Data entry and administration roles. Four fixed paragraphs plus an
/// optional mission paragraph.
pub struct DataEntry<'a> {
    request: &'a LetterRequest,
}

impl<'a> DataEntry<'a> {
    pub fn new(request: &'a LetterRequest) -> Self {
        Self { request }
    }

    fn opening(&self) -> String {
        let r = self.request;
        format!(
            "I am writing to express my interest in the {} position at {}{}. I am a \
             detail-oriented worker with fast, accurate typing, and I am confident I can \
             keep your records clean and up to date from my first week.",
            r.position,
            r.company,
            genre_clause(&r.company_genre)
        )
    }

    fn company(&self) -> String {
        let r = self.request;
        let reason = format!(
            "I would value the opportunity to join {} because reliable data sits underneath \
             every decision a business makes, and keeping it reliable is work I enjoy.",
            r.company
        );
        match as_sentence(&r.company_description) {
            Some(description) => format!("{description} {reason}"),
            None => reason,
        }
    }

    fn experience(&self) -> String {
        "In previous roles I have maintained large spreadsheets and customer databases, \
         checked entries against source documents and met tight turnaround times without \
         trading away accuracy. I am comfortable in Excel and common CRM systems and learn \
         new tools quickly."
            .to_string()
    }

    fn mission(&self) -> Option<String> {
        let r = self.request;
        mission_phrase(&r.company_mission).map(|mission| {
            format!(
                "I share {}'s aim to {mission}, and I would be glad to support it with careful, \
                 consistent work behind the scenes.",
                r.company
            )
        })
    }

    fn closing(&self) -> String {
        format!(
            "Thank you for considering my application for the {} role. I would welcome the \
             chance to discuss how I can help {} and am available for an interview at your \
             convenience.",
            self.request.position, self.request.company
        )
    }
}

impl CoverLetterTemplate for DataEntry<'_> {
    fn name(&self) -> &'static str {
        "DataEntry"
    }

    fn paragraph(&self, index: usize) -> Option<String> {
        match index {
            1 => Some(self.opening()),
            2 => Some(self.company()),
            3 => Some(self.experience()),
            4 => self.mission(),
            5 => Some(self.closing()),
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
    fn test_five_paragraphs_with_mission() {
        let request = sample_request(IndustryField::Data, None);
        let template = DataEntry::new(&request);
        assert_eq!(template.paragraphs().len(), 5);
        assert_eq!(template.paragraph(6), None);
    }

    #[test]
    fn test_mission_paragraph_dropped_when_blank() {
        let mut request = sample_request(IndustryField::Data, None);
        request.company_mission = "  ".to_string();
        let template = DataEntry::new(&request);
        assert_eq!(template.paragraph(4), None);
        assert_eq!(template.paragraphs().len(), 4);
    }

    #[test]
    fn test_opening_includes_genre_clause() {
        let request = sample_request(IndustryField::Data, None);
        let opening = DataEntry::new(&request).paragraph(1).unwrap();
        assert!(
            opening.contains("at Acme Corp, a logistics company."),
            "got: {opening}"
        );
    }

    #[test]
    fn test_company_paragraph_leads_with_description() {
        let request = sample_request(IndustryField::Data, None);
        let p = DataEntry::new(&request).paragraph(2).unwrap();
        assert!(p.starts_with("A leader of freight automation in Australia. "), "got: {p}");
    }
}
