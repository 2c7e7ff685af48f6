//! Option lists offered by the select inputs, as `(value, label)` pairs.

pub const SALES_VOLUMES: [(&str, &str); 5] = [
    ("$0 - $1,000", "$0 - $1,000"),
    ("$1,000 - $5,000", "$1,000 - $5,000"),
    ("$5,000 - $10,000", "$5,000 - $10,000"),
    ("$10,000 - $50,000", "$10,000 - $50,000"),
    ("$50,000+", "$50,000+"),
];

pub const MARKETS: [(&str, &str); 6] = [
    ("Europe", "Europe"),
    ("North America", "North America"),
    ("Asia", "Asia"),
    ("Middle East", "Middle East"),
    ("Africa", "Africa"),
    ("Other", "Other"),
];

pub const BUDGETS: [(&str, &str); 4] = [
    ("<10K", "Less than €10K"),
    ("10K-50K", "€10K - €50K"),
    ("50K-200K", "€50K - €200K"),
    (">200K", "More than €200K"),
];

pub fn label_for(choices: &[(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    choices.iter().find(|(v, _)| *v == value).map(|(_, l)| *l)
}
