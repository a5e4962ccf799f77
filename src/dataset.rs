//! Word-pair datasets: the built-in GB/US table and external loading.
//!
//! The built-in table covers the common systematic differences (-our/-or,
//! -re/-er, -ise/-ize, -yse/-yze, doubled consonants, -ogue/-og,
//! -ence/-ense, ae/oe digraphs) plus frequent irregular pairs. Keys and
//! values are canonical lowercase spellings; the table makes no claim of
//! dialectal completeness. Callers with their own datasets can load a JSON
//! file of pairs instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrthovarError, Result};

/// A canonical spelling in each variant.
///
/// Both spellings are non-empty by convention. The dictionary accepts
/// pairs as given without validation; dataset loading enforces the
/// convention because a file is the one place malformed rows appear
/// unnoticed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// British spelling.
    pub gb: String,
    /// American spelling.
    pub us: String,
}

impl WordPair {
    /// Create a new word pair.
    pub fn new<G: Into<String>, U: Into<String>>(gb: G, us: U) -> Self {
        WordPair {
            gb: gb.into(),
            us: us.into(),
        }
    }
}

/// The built-in GB→US spelling table, in seed order.
static PAIRS: &[(&str, &str)] = &[
    // -our / -or
    ("armour", "armor"),
    ("behaviour", "behavior"),
    ("candour", "candor"),
    ("clamour", "clamor"),
    ("colour", "color"),
    ("endeavour", "endeavor"),
    ("favour", "favor"),
    ("favourite", "favorite"),
    ("flavour", "flavor"),
    ("harbour", "harbor"),
    ("honour", "honor"),
    ("humour", "humor"),
    ("labour", "labor"),
    ("neighbour", "neighbor"),
    ("odour", "odor"),
    ("rumour", "rumor"),
    ("saviour", "savior"),
    ("splendour", "splendor"),
    ("valour", "valor"),
    ("vapour", "vapor"),
    ("vigour", "vigor"),
    // -re / -er
    ("calibre", "caliber"),
    ("centre", "center"),
    ("fibre", "fiber"),
    ("litre", "liter"),
    ("lustre", "luster"),
    ("manoeuvre", "maneuver"),
    ("meagre", "meager"),
    ("metre", "meter"),
    ("mitre", "miter"),
    ("sabre", "saber"),
    ("sceptre", "scepter"),
    ("sombre", "somber"),
    ("spectre", "specter"),
    ("theatre", "theater"),
    // -ise / -ize
    ("apologise", "apologize"),
    ("authorise", "authorize"),
    ("capitalise", "capitalize"),
    ("categorise", "categorize"),
    ("criticise", "criticize"),
    ("customise", "customize"),
    ("emphasise", "emphasize"),
    ("finalise", "finalize"),
    ("generalise", "generalize"),
    ("initialise", "initialize"),
    ("maximise", "maximize"),
    ("memorise", "memorize"),
    ("minimise", "minimize"),
    ("modernise", "modernize"),
    ("normalise", "normalize"),
    ("optimise", "optimize"),
    ("organise", "organize"),
    ("prioritise", "prioritize"),
    ("realise", "realize"),
    ("recognise", "recognize"),
    ("serialise", "serialize"),
    ("specialise", "specialize"),
    ("standardise", "standardize"),
    ("summarise", "summarize"),
    ("synchronise", "synchronize"),
    ("utilise", "utilize"),
    ("visualise", "visualize"),
    // -yse / -yze
    ("analyse", "analyze"),
    ("catalyse", "catalyze"),
    ("hydrolyse", "hydrolyze"),
    ("paralyse", "paralyze"),
    // doubled consonants
    ("cancelled", "canceled"),
    ("cancelling", "canceling"),
    ("counsellor", "counselor"),
    ("fuelled", "fueled"),
    ("jeweller", "jeweler"),
    ("labelled", "labeled"),
    ("labelling", "labeling"),
    ("marvellous", "marvelous"),
    ("modelled", "modeled"),
    ("modelling", "modeling"),
    ("signalling", "signaling"),
    ("travelled", "traveled"),
    ("traveller", "traveler"),
    ("travelling", "traveling"),
    // -ogue / -og
    ("analogue", "analog"),
    ("catalogue", "catalog"),
    ("dialogue", "dialog"),
    // -ence / -ense
    ("defence", "defense"),
    ("licence", "license"),
    ("offence", "offense"),
    ("pretence", "pretense"),
    // ae / oe digraphs
    ("anaemia", "anemia"),
    ("anaesthesia", "anesthesia"),
    ("diarrhoea", "diarrhea"),
    ("encyclopaedia", "encyclopedia"),
    ("mediaeval", "medieval"),
    ("oesophagus", "esophagus"),
    ("oestrogen", "estrogen"),
    ("paediatric", "pediatric"),
    // irregular pairs
    ("aeroplane", "airplane"),
    ("aluminium", "aluminum"),
    ("artefact", "artifact"),
    ("cheque", "check"),
    ("cosy", "cozy"),
    ("doughnut", "donut"),
    ("draught", "draft"),
    ("gaol", "jail"),
    ("grey", "gray"),
    ("jewellery", "jewelry"),
    ("kerb", "curb"),
    ("mould", "mold"),
    ("mouldy", "moldy"),
    ("moustache", "mustache"),
    ("plough", "plow"),
    ("programme", "program"),
    ("pyjamas", "pajamas"),
    ("sceptical", "skeptical"),
    ("smoulder", "smolder"),
    ("storey", "story"),
    ("sulphur", "sulfur"),
    ("tyre", "tire"),
];

/// Iterate the built-in dataset in seed order.
pub fn pairs() -> impl Iterator<Item = WordPair> {
    PAIRS.iter().map(|&(gb, us)| WordPair::new(gb, us))
}

/// Number of pairs in the built-in dataset.
pub fn len() -> usize {
    PAIRS.len()
}

/// Load a dataset from a JSON file.
///
/// The file holds an array of two-element arrays, GB spelling first,
/// preserving order:
///
/// ```json
/// [
///   ["colour", "color"],
///   ["centre", "center"]
/// ]
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordPair>> {
    let content = fs::read_to_string(path)?;
    let rows: Vec<(String, String)> = serde_json::from_str(&content)?;

    let mut pairs = Vec::with_capacity(rows.len());
    for (i, (gb, us)) in rows.into_iter().enumerate() {
        if gb.is_empty() || us.is_empty() {
            return Err(OrthovarError::dataset(format!(
                "empty spelling in pair at row {i}"
            )));
        }
        pairs.push(WordPair { gb, us });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_builtin_dataset_shape() {
        assert!(len() > 100);
        for pair in pairs() {
            assert!(!pair.gb.is_empty());
            assert!(!pair.us.is_empty());
            assert_eq!(pair.gb, pair.gb.to_lowercase());
            assert_eq!(pair.us, pair.us.to_lowercase());
        }
    }

    #[test]
    fn test_builtin_dataset_keys_unique() {
        let mut gb_keys: Vec<_> = pairs().map(|p| p.gb).collect();
        let mut us_keys: Vec<_> = pairs().map(|p| p.us).collect();
        gb_keys.sort();
        us_keys.sort();
        gb_keys.dedup();
        us_keys.dedup();
        assert_eq!(gb_keys.len(), len());
        assert_eq!(us_keys.len(), len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[["colour", "color"], ["tyre", "tire"]]"#).unwrap();
        file.flush().unwrap();

        let pairs = load_from_file(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], WordPair::new("colour", "color"));
        assert_eq!(pairs[1], WordPair::new("tyre", "tire"));
    }

    #[test]
    fn test_load_rejects_empty_spelling() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[["colour", ""]]"#).unwrap();
        file.flush().unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, OrthovarError::Dataset(_)));
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"colour": "color"}}"#).unwrap();
        file.flush().unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(OrthovarError::Json(_))
        ));
    }
}
