use crate::models::LetterRequest;
use crate::templates::{as_sentence, genre_clause, mission_phrase, CoverLetterTemplate};

/// Data science and analytics roles.
pub struct DataScientist<'a> {
    request: &'a LetterRequest,
}

impl<'a> DataScientist<'a> {
    pub fn new(request: &'a LetterRequest) -> Self {
        Self { request }
    }

    fn opening(&self) -> String {
        let r = self.request;
        format!(
            "I am writing to apply for the {} position at {}{}. I like working close to \
             the data, asking sharp questions of it and turning the answers into decisions \
             people can act on.",
            r.position,
            r.company,
            genre_clause(&r.company_genre)
        )
    }

    fn company(&self) -> Option<String> {
        let r = self.request;
        as_sentence(&r.company_description).map(|description| {
            format!(
                "{description} An organisation like {} generates exactly the kind of rich, \
                 messy data I enjoy making sense of.",
                r.company
            )
        })
    }

    fn experience(&self) -> String {
        "My toolkit covers Python, SQL and the usual scientific stack, from cleaning and \
         exploring raw datasets to building, validating and explaining statistical and \
         machine learning models."
            .to_string()
    }

    fn communication(&self) -> String {
        "I put as much care into communicating results as into producing them. I write \
         plain-language summaries, build clear visualisations and make sure stakeholders \
         understand both what a model says and where its limits are."
            .to_string()
    }

    fn mission(&self) -> Option<String> {
        let r = self.request;
        mission_phrase(&r.company_mission).map(|mission| {
            format!(
                "I am motivated by {}'s commitment to {mission}, and I believe careful \
                 analysis can help measure and accelerate that progress.",
                r.company
            )
        })
    }

    fn closing(&self) -> String {
        format!(
            "Thank you for considering my application. I would be delighted to discuss how \
             my skills fit the {} role and what I could contribute at {}.",
            self.request.position, self.request.company
        )
    }
}

impl CoverLetterTemplate for DataScientist<'_> {
    fn name(&self) -> &'static str {
        "DataScientist"
    }

    fn paragraph(&self, index: usize) -> Option<String> {
        match index {
            1 => Some(self.opening()),
            2 => self.company(),
            3 => Some(self.experience()),
            4 => Some(self.communication()),
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
    fn test_all_six_slots_filled_for_complete_request() {
        let request = sample_request(IndustryField::Sci, None);
        let template = DataScientist::new(&request);
        for i in 1..=6 {
            assert!(template.paragraph(i).is_some(), "slot {i} should be present");
        }
    }

    #[test]
    fn test_company_slot_depends_on_description() {
        let mut request = sample_request(IndustryField::Sci, None);
        request.company_description.clear();
        let template = DataScientist::new(&request);
        assert_eq!(template.paragraph(2), None);
        assert_eq!(template.paragraphs().len(), 5);
    }
}
