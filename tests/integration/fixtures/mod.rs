// Input texts with known segmentation and statistics

/// Mixed Latin/Cyrillic text with comma and whitespace runs
pub const MIXED_TEXT: &str = "Hello,,,,              words!! Это     тестовый    текст... Как дела?";

pub const MIXED_SENTENCES: [&str; 3] = ["Hello, words!!", "Это тестовый текст...", "Как дела?"];

pub const MIXED_WORDS: [&str; 7] = ["Hello", "Words", "Это", "Тестовый", "Текст", "Как", "Дела"];

/// Single sentence with a clear frequency ranking
pub const COUNTING_TEXT: &str = "one two two three three three";

/// Internal hyphen and apostrophe survive normalization
pub const JOINER_TEXT: &str = "well-known it's here";

/// Multi-line document with paragraphs and no trailing punctuation
pub const DOCUMENT_TEXT: &str = "The quick brown fox jumps.  The lazy dog sleeps!

Does the fox care?   No,, the fox does not...

It runs away";

/// Expected summary report for COUNTING_TEXT with default configuration
pub const COUNTING_SUMMARY_EXPECTED: &str = "==================================================
                 TEXT STATISTICS
==================================================

SUMMARY:
   • Words: 6
   • Characters: 24
   • Unique words: 3
   • Memory used: 0.06 KB

TOP 10 MOST FREQUENT WORDS:
   ┌──────────┬────────┐
   │ WORD     │ COUNT  │
   ├──────────┼────────┤
   │ Three    │ 3      │
   │ Two      │ 2      │
   │ One      │ 1      │
   └──────────┴────────┘

==================================================";

/// Inputs used for property style checks
pub const PROPERTY_INPUTS: &[&str] = &[
    "",
    "   ",
    "\n\n\t",
    "...",
    "?! ?! ?!",
    "a. . b",
    ",,,, ,,,,",
    "-- '' --",
    "Hello,,,, words!! Это тестовый текст... Как дела?",
    "No terminal punctuation here",
    "Mr. Smith went to Washington. He said hi!",
    "Numbers 1.5 and 2,000 count too. 3 apples, 4 pears?",
    "rock'n'roll 'quoted' -dashed- well-known",
];

/// Large text for throughput checks (500 sentences)
pub fn generate_large_text() -> String {
    let mut result = String::new();

    for i in 1..=500 {
        result.push_str(&format!("This is sentence number {i}. "));
        if i % 50 == 0 {
            result.push('\n');
        }
    }

    result
}
