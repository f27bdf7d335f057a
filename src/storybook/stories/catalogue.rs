//! Demo data shared by the stories.

use tuggest::autocomplete::AutocompleteOption;

const FRUIT: [&str; 20] = [
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Coconut",
    "Cranberry",
    "Damson",
    "Grape",
    "Grapefruit",
    "Lemon",
    "Lime",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Pineapple",
    "Tangerine",
];

const TAGS: [&str; 12] = [
    "bug",
    "documentation",
    "duplicate",
    "enhancement",
    "good first issue",
    "help wanted",
    "invalid",
    "performance",
    "question",
    "refactor",
    "security",
    "wontfix",
];

const COMMANDS: [&str; 10] = [
    "quit",
    "q",
    "image",
    "images",
    "container",
    "containers",
    "volume",
    "volumes",
    "network",
    "networks",
];

pub const COUNTRIES: [&str; 40] = [
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Denmark",
    "Egypt",
    "Finland",
    "France",
    "Germany",
    "Ghana",
    "Greece",
    "Iceland",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Peru",
    "Poland",
    "Portugal",
    "Scotland",
    "South Africa",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "United Kingdom",
    "Uruguay",
];

fn texts(values: &[&str]) -> Vec<AutocompleteOption> {
    values.iter().map(|v| AutocompleteOption::from(*v)).collect()
}

pub fn fruit() -> Vec<AutocompleteOption> {
    texts(&FRUIT)
}

pub fn tags() -> Vec<AutocompleteOption> {
    texts(&TAGS)
}

pub fn commands() -> Vec<AutocompleteOption> {
    texts(&COMMANDS)
}

/// Records with display text and per-row styling
pub fn rich_fruit() -> Vec<AutocompleteOption> {
    [
        ("apple", "🍎 Apple", "red", "crisp, keeps for months"),
        ("banana", "🍌 Banana", "yellow", "ripens on the counter"),
        ("cherry", "🍒 Cherry", "red", "stone fruit"),
        ("grape", "🍇 Grape", "magenta", "grows in bunches"),
        ("kiwi", "🥝 Kiwi", "green", "fuzzy outside"),
        ("lemon", "🍋 Lemon", "yellow", "sour"),
        ("mango", "🥭 Mango", "#ffb347", "stone fruit"),
        ("melon", "🍈 Melon", "lightgreen", "mostly water"),
        ("peach", "🍑 Peach", "#ffcba4", "stone fruit"),
        ("pear", "🍐 Pear", "lightyellow", "ripens off the tree"),
        ("pineapple", "🍍 Pineapple", "yellow", "not a pine, not an apple"),
        ("tangerine", "🍊 Tangerine", "lightred", "easy to peel"),
    ]
    .into_iter()
    .map(|(value, children, fg, description)| {
        AutocompleteOption::record(value)
            .children(children)
            .attribute("fg", fg)
            .attribute("description", description)
            .into()
    })
    .collect()
}
