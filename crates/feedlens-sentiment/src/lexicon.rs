//! Word valences and the modifier word lists used by the analyzer.
//!
//! The built-in table is a subset of the VADER lexicon (mean human ratings on
//! a -4..=4 scale). A full VADER-format file can replace it at startup via
//! [`Lexicon::from_path`].

use std::collections::HashMap;
use std::path::Path;

use crate::error::SentimentError;

/// Built-in word valences.
///
/// Words whose sentiment depends heavily on context in short posts ("fine",
/// "no", "well") are left out.
#[rustfmt::skip]
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("agree", 1.5), ("amazing", 2.8), ("appreciate", 1.7), ("awesome", 3.1),
    ("beautiful", 2.9), ("best", 3.2), ("better", 1.9), ("brilliant", 2.8),
    ("calm", 1.3), ("care", 2.2), ("celebrate", 2.7), ("comfort", 1.5),
    ("confident", 2.2), ("congrats", 2.4), ("congratulations", 2.9), ("cool", 1.3),
    ("delight", 2.9), ("delighted", 2.3), ("eager", 1.5), ("easy", 1.9),
    ("elegant", 2.1), ("enjoy", 2.2), ("enjoyed", 2.3), ("excellent", 2.7),
    ("excited", 1.4), ("exciting", 2.2), ("fabulous", 2.4), ("fair", 1.3),
    ("faith", 1.8), ("fantastic", 2.6), ("fascinating", 2.5), ("favorite", 2.0),
    ("free", 2.3), ("fresh", 1.3), ("friend", 2.2), ("friendly", 2.2),
    ("fun", 2.3), ("funny", 1.9), ("glad", 2.0), ("glorious", 2.9),
    ("good", 1.9), ("gorgeous", 3.0), ("grateful", 2.0), ("great", 3.1),
    ("happiness", 2.6), ("happy", 2.7), ("haha", 2.0), ("healthy", 1.7),
    ("help", 1.7), ("helpful", 1.8), ("hero", 2.6), ("hilarious", 1.7),
    ("honest", 2.3), ("hope", 1.9), ("hopeful", 1.9), ("hug", 2.1),
    ("ideal", 2.4), ("impressive", 2.3), ("improve", 1.9), ("improved", 2.1),
    ("inspiring", 2.4), ("interesting", 1.7), ("joy", 2.8), ("joyful", 2.9),
    ("kind", 2.4), ("laugh", 2.6), ("like", 2.0), ("liked", 1.8),
    ("lol", 1.8), ("love", 3.2), ("loved", 2.9), ("lovely", 2.8),
    ("loves", 2.7), ("loving", 2.9), ("loyal", 2.1), ("lucky", 1.8),
    ("merry", 2.5), ("miracle", 2.8), ("nice", 1.8), ("ok", 1.2),
    ("okay", 0.9), ("outstanding", 3.0), ("paradise", 3.2), ("passion", 2.0),
    ("peace", 2.5), ("perfect", 2.7), ("pleasant", 2.3), ("please", 1.3),
    ("pleased", 1.9), ("pleasure", 2.7), ("positive", 2.6), ("powerful", 1.8),
    ("praise", 2.6), ("precious", 2.7), ("pretty", 2.2), ("proud", 2.1),
    ("recommend", 1.5), ("relief", 2.1), ("respect", 2.1), ("reward", 2.1),
    ("rich", 2.6), ("romantic", 2.3), ("safe", 1.9), ("satisfied", 1.8),
    ("save", 2.2), ("smart", 1.7), ("smile", 1.5), ("special", 1.7),
    ("splendid", 2.8), ("strong", 2.3), ("stunning", 1.6), ("succeed", 2.2),
    ("success", 2.7), ("successful", 2.8), ("super", 2.9), ("superb", 3.1),
    ("support", 1.7), ("sweet", 2.0), ("terrific", 2.1), ("thank", 1.5),
    ("thankful", 2.7), ("thanks", 1.9), ("thrilled", 2.5), ("triumph", 2.1),
    ("true", 1.8), ("trust", 2.3), ("useful", 1.9), ("valuable", 2.1),
    ("warm", 0.9), ("welcome", 2.0), ("win", 2.8), ("winner", 2.8),
    ("winning", 2.4), ("wins", 2.7), ("wise", 1.8), ("won", 2.7),
    ("wonderful", 2.7), ("worthy", 1.9), ("wow", 2.8), ("yay", 2.4),
    ("yes", 1.7),
    // negative
    ("afraid", -2.2), ("anger", -2.7), ("angry", -2.3), ("annoyed", -1.6),
    ("annoying", -1.7), ("attack", -2.1), ("awful", -2.0), ("bad", -2.5),
    ("ban", -2.6), ("banned", -2.0), ("blame", -1.4), ("bored", -1.1),
    ("boring", -1.3), ("broke", -1.8), ("broken", -2.1), ("cheat", -2.0),
    ("complain", -1.5), ("confused", -1.3), ("corrupt", -3.0), ("crap", -1.6),
    ("crash", -1.7), ("crime", -2.5), ("criminal", -2.4), ("crisis", -3.1),
    ("cruel", -2.8), ("cry", -2.1), ("crying", -2.1), ("damage", -2.2),
    ("damn", -1.7), ("danger", -2.4), ("dangerous", -2.1), ("dead", -3.3),
    ("death", -2.9), ("destroy", -2.5), ("destroyed", -3.4), ("die", -2.9),
    ("died", -2.6), ("difficult", -1.5), ("dirty", -1.9), ("disappointed", -1.9),
    ("disappointing", -2.2), ("disappointment", -2.3), ("disaster", -3.1), ("disgusting", -2.4),
    ("dislike", -1.6), ("doubt", -1.5), ("dread", -2.0), ("dumb", -2.3),
    ("embarrassed", -1.5), ("evil", -3.4), ("fail", -2.5), ("failed", -2.3),
    ("fails", -1.8), ("failure", -2.3), ("fake", -2.1), ("fault", -1.7),
    ("fear", -2.2), ("fraud", -2.8), ("furious", -2.7), ("grief", -2.2),
    ("gross", -2.1), ("guilty", -1.8), ("harm", -2.5), ("hate", -2.7),
    ("hated", -3.2), ("hates", -1.9), ("hating", -2.3), ("hell", -3.6),
    ("helpless", -2.0), ("hopeless", -2.0), ("horrible", -2.5), ("hostile", -2.2),
    ("hurt", -2.4), ("idiot", -2.3), ("insult", -2.3), ("jealous", -2.0),
    ("kill", -3.7), ("killed", -3.5), ("killing", -3.4), ("liar", -2.9),
    ("lie", -1.6), ("lies", -1.8), ("lonely", -1.5), ("lose", -1.7),
    ("losing", -1.6), ("loss", -1.3), ("lost", -1.3), ("mad", -2.2),
    ("miserable", -2.2), ("mess", -1.5), ("mistake", -1.4), ("nasty", -2.6),
    ("negative", -2.7), ("nervous", -1.1), ("outrage", -2.3), ("pain", -2.3),
    ("painful", -1.9), ("panic", -2.3), ("pathetic", -2.7), ("pity", -1.2),
    ("poison", -2.5), ("poor", -2.1), ("problem", -1.7), ("problems", -1.7),
    ("rage", -2.6), ("reject", -1.7), ("rejected", -2.3), ("rude", -2.0),
    ("ruin", -2.8), ("ruined", -2.4), ("sad", -2.1), ("sadly", -1.8),
    ("sadness", -1.9), ("scam", -2.7), ("scandal", -1.9), ("scared", -2.2),
    ("scary", -2.2), ("selfish", -2.1), ("shame", -2.1), ("shit", -2.6),
    ("shocked", -1.3), ("shocking", -1.7), ("sick", -2.3), ("sorrow", -2.4),
    ("sorry", -0.3), ("stress", -1.8), ("stressed", -1.4), ("stupid", -2.4),
    ("suck", -1.9), ("sucks", -1.5), ("suffer", -2.5), ("suffering", -2.1),
    ("terrible", -2.1), ("threat", -2.4), ("tired", -1.9), ("toxic", -2.4),
    ("tragedy", -3.4), ("tragic", -3.4), ("trouble", -1.7), ("ugly", -2.3),
    ("unfair", -2.1), ("unfortunate", -2.0), ("unfortunately", -1.4), ("unhappy", -1.8),
    ("upset", -1.6), ("useless", -1.8), ("victim", -2.2), ("violence", -3.1),
    ("violent", -2.9), ("war", -2.9), ("warning", -1.4), ("weak", -1.9),
    ("worried", -1.2), ("worry", -1.9), ("worse", -2.1), ("worst", -3.1),
    ("worthless", -1.9), ("wrong", -2.1), ("wtf", -2.8),
];

/// Intensity added to a sentiment word by a preceding booster.
pub(crate) const BOOSTER_INCR: f64 = 0.293;
pub(crate) const BOOSTER_DECR: f64 = -0.293;

#[rustfmt::skip]
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCR), ("amazingly", BOOSTER_INCR), ("awfully", BOOSTER_INCR),
    ("completely", BOOSTER_INCR), ("considerably", BOOSTER_INCR), ("decidedly", BOOSTER_INCR),
    ("deeply", BOOSTER_INCR), ("enormously", BOOSTER_INCR), ("entirely", BOOSTER_INCR),
    ("especially", BOOSTER_INCR), ("exceptionally", BOOSTER_INCR), ("extremely", BOOSTER_INCR),
    ("fabulously", BOOSTER_INCR), ("flipping", BOOSTER_INCR), ("freaking", BOOSTER_INCR),
    ("fucking", BOOSTER_INCR), ("fully", BOOSTER_INCR), ("greatly", BOOSTER_INCR),
    ("hella", BOOSTER_INCR), ("highly", BOOSTER_INCR), ("hugely", BOOSTER_INCR),
    ("incredibly", BOOSTER_INCR), ("intensely", BOOSTER_INCR), ("majorly", BOOSTER_INCR),
    ("more", BOOSTER_INCR), ("most", BOOSTER_INCR), ("particularly", BOOSTER_INCR),
    ("purely", BOOSTER_INCR), ("quite", BOOSTER_INCR), ("really", BOOSTER_INCR),
    ("remarkably", BOOSTER_INCR), ("so", BOOSTER_INCR), ("substantially", BOOSTER_INCR),
    ("thoroughly", BOOSTER_INCR), ("totally", BOOSTER_INCR), ("tremendously", BOOSTER_INCR),
    ("uber", BOOSTER_INCR), ("unbelievably", BOOSTER_INCR), ("unusually", BOOSTER_INCR),
    ("utterly", BOOSTER_INCR), ("very", BOOSTER_INCR),
    ("almost", BOOSTER_DECR), ("barely", BOOSTER_DECR), ("hardly", BOOSTER_DECR),
    ("kinda", BOOSTER_DECR), ("kindof", BOOSTER_DECR), ("less", BOOSTER_DECR),
    ("little", BOOSTER_DECR), ("marginally", BOOSTER_DECR), ("occasionally", BOOSTER_DECR),
    ("partly", BOOSTER_DECR), ("scarcely", BOOSTER_DECR), ("slightly", BOOSTER_DECR),
    ("somewhat", BOOSTER_DECR), ("sorta", BOOSTER_DECR), ("sortof", BOOSTER_DECR),
];

#[rustfmt::skip]
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "never", "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt",
    "shant", "shouldnt", "uhuh", "wasnt", "werent", "without", "wont", "wouldnt",
    "rarely", "seldom", "despite",
];

/// Returns the booster scalar for a lowercase word, if it is one.
pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find_map(|&(w, scalar)| (w == word).then_some(scalar))
}

/// Whether a lowercase word negates the sentiment that follows it.
pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

/// Word → valence table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The compiled-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(LEXICON.iter().copied())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let valences = entries
            .into_iter()
            .map(|(word, valence)| (word.to_lowercase(), valence))
            .collect();
        Self { valences }
    }

    /// Loads a VADER-format lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if the file cannot be read, or
    /// [`SentimentError::LexiconParse`] on a malformed line.
    pub fn from_path(path: &Path) -> Result<Self, SentimentError> {
        let content = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&content, path)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded sentiment lexicon");
        Ok(lexicon)
    }

    /// Parses lexicon text: one `token<TAB>mean[<TAB>...]` entry per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Extra columns
    /// (standard deviation, raw ratings) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconParse`] when a line has no valence
    /// column or the valence is not a finite number.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, SentimentError> {
        let mut valences = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let parse_error = |reason: String| SentimentError::LexiconParse {
                path: origin.to_path_buf(),
                line: index + 1,
                reason,
            };

            let mut columns = trimmed.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            let raw = columns
                .next()
                .ok_or_else(|| parse_error("missing valence column".to_owned()))?
                .trim();
            let valence: f64 = raw
                .parse()
                .map_err(|e| parse_error(format!("invalid valence {raw:?}: {e}")))?;
            if !valence.is_finite() {
                return Err(parse_error(format!("valence {raw:?} is not finite")));
            }
            valences.insert(word.to_lowercase(), valence);
        }
        Ok(Self { valences })
    }

    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
