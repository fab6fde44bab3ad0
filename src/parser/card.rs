use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use thiserror::Error;

use super::address;
use crate::export::Clinic;

static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2.card-info-title").unwrap());
static ADDRESS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.card-info-address").unwrap());
static PHONE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="tel:"]"#).unwrap());
static WEBSITE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="http"]"#).unwrap());

/// Why a result card yielded no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card has no title element")]
    MissingName,
    #[error("card has no address element")]
    MissingAddress,
}

/// Extract one clinic record from a result card.
///
/// The title and address elements are mandatory; a card lacking either is
/// rejected whole, never turned into a partial record. The telephone and
/// website anchors are optional and leave their fields absent instead.
pub fn extract(card: ElementRef) -> Result<Clinic, CardError> {
    let name = card.select(&NAME_SEL).next().ok_or(CardError::MissingName)?;
    let address_el = card
        .select(&ADDRESS_SEL)
        .next()
        .ok_or(CardError::MissingAddress)?;

    let address = text_of(address_el);
    let postcode = address::postal_code(&address);
    let city = address::city(&address);

    // The overlay label only exists on the telephone anchor.
    let phone_anchor = card.select(&PHONE_SEL).next();
    let phone = phone_anchor
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);
    let data_overlay_label = phone_anchor
        .and_then(|a| a.value().attr("data-overlay-label"))
        .map(str::to_string);

    // First anchor whose target starts with "http" wins, share and map
    // links included. Downstream consumers rely on this loose match.
    let website = card
        .select(&WEBSITE_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    Ok(Clinic {
        name: text_of(name),
        address,
        postcode,
        city,
        phone,
        data_overlay_label,
        website,
    })
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
