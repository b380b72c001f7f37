//! Keyword tables driving type classification and category inference.
//!
//! Matching is substring-based on a lower-cased copy of the input, so every
//! keyword here must be lower-case. Order matters twice: tiers are scanned
//! income-high → income-medium → expense-high → expense-medium, and within a
//! category table the first category with a matching keyword wins.

use crate::settings::Settings;

pub const DEFAULT_INCOME_CATEGORY: &str = "Gaji";
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Lainnya";
pub const FALLBACK_DESCRIPTION: &str = "Transaction";

pub const INCOME_HIGH: &[&str] = &[
    "gaji",
    "salary",
    "income",
    "pendapatan",
    "transfer masuk",
    "transfer dari",
    "dapat",
    "terima",
    "bonus",
    "tunjangan",
    "uang masuk",
];

pub const INCOME_MEDIUM: &[&str] = &["masuk", "diterima", "dapat uang"];

pub const EXPENSE_HIGH: &[&str] = &[
    "beli",
    "buy",
    "purchase",
    "bayar",
    "pay",
    "payment",
    "pembayaran",
    "belanja",
    "shopping",
    "expense",
    "pengeluaran",
    "tagihan",
    "bill",
    "bayar tagihan",
];

pub const EXPENSE_MEDIUM: &[&str] = &["keluar", "spend", "habis", "uang keluar", "pengeluaran"];

/// Verbs that signal a transaction context. A bare 1-3 digit number is only
/// promoted to an amount when one of these appears in the text.
pub const CONTEXT_VERBS: &[&str] = &[
    "beli",
    "bayar",
    "gaji",
    "transfer",
    "tagihan",
    "pembayaran",
    "pengeluaran",
    "pendapatan",
];

const INCOME_CATEGORIES: &[(&str, &[&str])] = &[
    ("Gaji", &["gaji", "salary", "upah", "payroll"]),
    ("Freelance", &["freelance", "proyek", "project", "honor", "komisi"]),
    (
        "Investasi",
        &["investasi", "dividen", "saham", "bunga", "deposito", "reksadana"],
    ),
    ("Hadiah", &["hadiah", "gift", "thr", "bonus", "angpao"]),
];

const EXPENSE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Makanan",
        &[
            "makan", "makanan", "food", "bakso", "nasi", "sate", "mie", "ayam", "kopi",
            "minum", "jajan", "sarapan", "restoran", "warung", "gofood", "grabfood",
        ],
    ),
    (
        "Transportasi",
        &[
            "bensin", "transportasi", "ojek", "gojek", "grab", "taksi", "taxi", "bus",
            "kereta", "parkir", "tol", "angkot",
        ],
    ),
    (
        "Belanja",
        &["belanja", "shopping", "baju", "sepatu", "tas", "shopee", "tokopedia", "lazada"],
    ),
    (
        "Tagihan",
        &[
            "tagihan", "listrik", "internet", "wifi", "pulsa", "token", "pln", "bpjs",
            "cicilan", "sewa", "kontrakan",
        ],
    ),
    (
        "Hiburan",
        &[
            "hiburan", "nonton", "bioskop", "film", "game", "netflix", "spotify", "konser",
            "liburan", "tiket",
        ],
    ),
    (
        "Kesehatan",
        &["kesehatan", "obat", "dokter", "rumah sakit", "apotek", "vitamin", "klinik"],
    ),
];

/// Runtime category tables. Starts from the built-in keyword lists and can be
/// extended from user settings before the parser is constructed.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub income_categories: Vec<(String, Vec<String>)>,
    pub expense_categories: Vec<(String, Vec<String>)>,
    pub default_income_category: String,
    pub default_expense_category: String,
}

impl Default for Lexicon {
    fn default() -> Self {
        let own = |table: &[(&str, &[&str])]| {
            table
                .iter()
                .map(|(name, kws)| {
                    (
                        name.to_string(),
                        kws.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect()
        };
        Self {
            income_categories: own(INCOME_CATEGORIES),
            expense_categories: own(EXPENSE_CATEGORIES),
            default_income_category: DEFAULT_INCOME_CATEGORY.to_string(),
            default_expense_category: DEFAULT_EXPENSE_CATEGORY.to_string(),
        }
    }
}

impl Lexicon {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut lexicon = Self::default();
        lexicon.default_income_category = settings.default_income_category.clone();
        lexicon.default_expense_category = settings.default_expense_category.clone();
        for (category, keywords) in &settings.extra_keywords {
            lexicon.extend_category(category, keywords);
        }
        lexicon
    }

    /// Append keywords to an existing category (either table); unknown
    /// category names become a new expense category.
    pub fn extend_category(&mut self, category: &str, keywords: &[String]) {
        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        for table in [&mut self.income_categories, &mut self.expense_categories] {
            if let Some((_, kws)) = table.iter_mut().find(|(name, _)| name == category) {
                kws.extend(lowered);
                return;
            }
        }
        self.expense_categories.push((category.to_string(), lowered));
    }
}
