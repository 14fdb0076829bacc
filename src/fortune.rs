use crate::{
    cow::{Cow, Presenter},
    dataset::{Fortune, Fortunes},
    prelude::*,
};
use rand::{seq::SliceRandom, Rng};

pub const NO_FORTUNE: &str = "No fortune found matching your criteria.";

/// Exact, case-sensitive category match. No category (or an empty one) keeps everything.
pub fn filter<'a>(fortunes: &'a [Fortune], category: Option<&str>) -> Vec<&'a Fortune> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => fortunes.iter().filter(|f| f.category == category).collect(),
        None => fortunes.iter().collect(),
    }
}

/// Picks one fortune text uniformly. `None` only for an empty slice.
pub fn select_random<'a, R>(fortunes: &[&'a Fortune], rng: &mut R) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    fortunes.choose(rng).map(|&f| f.text.as_str())
}

pub fn message<R, P>(
    fortunes: &[Fortune],
    category: Option<&str>,
    rng: &mut R,
    presenter: &P,
) -> Result<String>
where
    R: Rng + ?Sized,
    P: Presenter + ?Sized,
{
    let candidates = filter(fortunes, category);
    debug!(
        "{} of {} fortunes match category {category:?}",
        candidates.len(),
        fortunes.len()
    );

    if candidates.is_empty() {
        info!("🥠 no fortune for category {category:?}");
        return Ok(NO_FORTUNE.to_string());
    }

    let Some(text) = select_random(&candidates, rng) else {
        bail!("fails to select fortune");
    };
    info!("🥠 picked '{text}'");

    presenter.render(text)
}

/// A cow saying a random fortune from the embedded dataset.
pub fn fortune_message(category: Option<&str>) -> Result<String> {
    let fortunes = Fortunes::embedded()?;
    message(
        fortunes,
        category,
        &mut rand::thread_rng(),
        &Cow::default(),
    )
}
