pub mod address;
pub mod card;

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::export::Clinic;
use card::CardError;

static CARD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.js-entry-card-container").unwrap());

/// Everything one listing page yielded.
#[derive(Debug)]
pub struct PageExtraction {
    /// Result cards found on the page, accepted or not.
    pub cards: usize,
    pub clinics: Vec<Clinic>,
    /// Card index and reason for every rejected card.
    pub rejected: Vec<(usize, CardError)>,
}

/// Parse one listing page and extract a record per result card.
///
/// Cards are visited in document order and rejected cards leave a gap,
/// so record order always follows card order. A body with no result
/// cards at all (error page, layout change) comes back with `cards == 0`.
pub fn extract_page(html: &str) -> PageExtraction {
    let doc = Html::parse_document(html);

    let mut cards = 0;
    let mut clinics = Vec::new();
    let mut rejected = Vec::new();

    for (idx, card_el) in doc.select(&CARD_SEL).enumerate() {
        cards += 1;
        match card::extract(card_el) {
            Ok(clinic) => clinics.push(clinic),
            Err(err) => rejected.push((idx, err)),
        }
    }

    PageExtraction {
        cards,
        clinics,
        rejected,
    }
}
