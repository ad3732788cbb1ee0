//! Fuzzy pet search

use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher, Utf32Str,
};

use crate::store::Pet;

/// Text a pet is matched against
fn haystack(pet: &Pet) -> String {
    format!("{} {} {}", pet.name, pet.breed, pet.location)
}

/// Filter pets by a fuzzy query over name, breed and location
///
/// An empty query keeps every pet in repository order. Otherwise results are
/// ordered by score; equal scores keep repository order.
pub fn filter_pets(query: &str, pets: &[Pet]) -> Vec<Pet> {
    if query.trim().is_empty() {
        return pets.to_vec();
    }

    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);

    let mut scored: Vec<(u32, &Pet)> = pets
        .iter()
        .filter_map(|pet| {
            let text = haystack(pet);
            let mut buf = Vec::new();
            let score = pattern.score(Utf32Str::new(&text, &mut buf), &mut matcher)?;
            Some((score, pet))
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, pet)| pet.clone()).collect()
}
