use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::records::{RecordDetail, RecordId, RecordSummary};

const TITLES: [&str; 10] = [
    "Four-dollar toast",
    "Brooklyn health umami af",
    "Portland pop-up 3 moon schlitz",
    "Goth air plant prism",
    "Retro mumblecore roof party",
    "Raclette aesthetic",
    "Tofu put a bird on it yuccie polaroid",
    "8-bit XOXO hammock glossier flannel",
    "Subway flannel mustache",
    "Bicycle rights before they sold out raw denim",
];

const WORDS: [&str; 48] = [
    "artisan", "banjo", "beard", "bespoke", "bitters", "brunch", "chambray", "chia",
    "cliche", "cold-pressed", "cornhole", "craft", "cronut", "distillery", "dreamcatcher",
    "echo", "fanny", "fixie", "flexitarian", "forage", "gastropub", "gentrify", "hashtag",
    "heirloom", "hoodie", "iceland", "jean", "kale", "kickstarter", "kinfolk", "lomo",
    "lumbersexual", "meditation", "microdosing", "normcore", "occupy", "paleo", "pickled",
    "pour-over", "quinoa", "ramps", "sartorial", "seitan", "selvage", "shoreditch",
    "succulents", "tattooed", "vinyl",
];

/// The fixed record set served by the fixture server.
///
/// Titles are fixed; bodies are generated from `seed`, so the same seed
/// always yields the same records.
#[derive(Debug, Clone)]
pub struct FixtureData {
    records: Vec<RecordDetail>,
}

impl FixtureData {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = TITLES
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let paragraph_count = rng.random_range(1..=5);
                let body = (0..paragraph_count)
                    .map(|_| paragraph(&mut rng))
                    .collect::<Vec<_>>()
                    .join("\n");
                RecordDetail {
                    id: RecordId::new((index + 1).to_string()),
                    title: (*title).to_string(),
                    body,
                }
            })
            .collect();
        Self { records }
    }

    pub fn summaries(&self) -> Vec<RecordSummary> {
        self.records.iter().map(RecordDetail::summary).collect()
    }

    pub fn find(&self, id: &RecordId) -> Option<&RecordDetail> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn paragraph(rng: &mut StdRng) -> String {
    let sentences = rng.random_range(3..=7);
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence(rng: &mut StdRng) -> String {
    let words = rng.random_range(6..=14);
    let mut text = (0..words)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_ten_records_with_sequential_ids() {
        let data = FixtureData::generate(123);
        assert_eq!(data.len(), 10);
        let ids: Vec<String> = data.summaries().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids.first().map(String::as_str), Some("1"));
        assert_eq!(ids.last().map(String::as_str), Some("10"));
        assert_eq!(data.summaries()[3].title, "Goth air plant prism");
    }

    #[test]
    fn same_seed_same_bodies() {
        let a = FixtureData::generate(123);
        let b = FixtureData::generate(123);
        let id = RecordId::new("4");
        assert_eq!(a.find(&id), b.find(&id));
    }

    #[test]
    fn bodies_have_one_to_five_paragraphs() {
        let data = FixtureData::generate(7);
        for summary in data.summaries() {
            let detail = data.find(&summary.id).unwrap();
            let count = detail.paragraphs().count();
            assert!((1..=5).contains(&count), "{} paragraphs", count);
            assert!(detail.body.ends_with('.'));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let data = FixtureData::generate(123);
        assert!(data.find(&RecordId::new("42")).is_none());
        assert!(!data.is_empty());
    }
}
