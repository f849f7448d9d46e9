use crate::case::to_upper_first;
use rand::Rng;

/// Syllable inventory names are composed from.
pub const SYLLABLES: &[&str] = &[
    "abri", "aco", "ad", "bal", "ben", "ca", "lor", "da", "de", "fa", "fe",
    "ga", "ge", "ha", "he", "ja", "je", "ka", "ke", "la", "lem", "ma", "me",
    "nab", "nel", "pa", "pe", "rab", "re", "jef", "pan", "ta", "del", "va",
    "ve", "wa", "we", "da", "kal", "ya", "ye", "tor", "pel",
];

/// Composes a pronounceable name from uniformly drawn syllables and
/// uppercases the first letter. With `syllable_count` of `None`, draws 2
/// or 3 syllables. The generator is passed in, so a seeded one
/// reproduces the same names.
///
/// Usage example:
///
/// ```
/// use natural_str::names::random_name;
///
/// let mut rng = rand::thread_rng();
/// let name = random_name(&mut rng, Some(3));
/// assert!(name.chars().next().unwrap().is_uppercase());
/// ```
pub fn random_name<R: Rng>(rng: &mut R, syllable_count: Option<usize>) -> String {
    let count = syllable_count.unwrap_or_else(|| rng.gen_range(2..=3));
    let mut name = String::new();
    for _ in 0..count {
        name.push_str(SYLLABLES[rng.gen_range(0..SYLLABLES.len())]);
    }
    to_upper_first(&name)
}
