//! Morphology indexer.
//!
//! Groups a word collection by one of the three morphological fields into
//! sorted, letter-bucketed groups. Indexing is a pure function over the input
//! slice: indexes are rebuilt wholesale whenever the corpus changes, never
//! patched incrementally.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::corpus::{MorphField, WordEntry};
use crate::text::{initial_of, label_text, normalize_text, sort_key};

/// Placeholder value marking "no morphological part"; words carrying it are
/// excluded from that index.
pub const PLACEHOLDER_NONE: &str = "无";

/// The set of words sharing one exact morphological label.
///
/// Labels are case-sensitive: `"ab-"` and `"AB-"` are distinct groups. The
/// gloss is the first non-empty native-language gloss seen among members.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MorphGroup {
    pub label: String,
    pub gloss: String,
    pub words: Vec<WordEntry>,
}

impl MorphGroup {
    /// Stable anchor id for this group, e.g. `root-group-spect`.
    pub fn anchor_id(&self, field: MorphField) -> String {
        format!(
            "{}-group-{}",
            field.as_str(),
            crate::text::normalize_key(&self.label)
        )
    }
}

/// The result of indexing one morphological field across a corpus.
///
/// `items` holds every group sorted by label (case- and accent-insensitive,
/// ascending); `letter_map` buckets the same groups by uppercase initial (or
/// `'#'` for labels not starting with A-Z), in the same sorted order. Both
/// views refer into `items` by position, so they can never disagree about
/// membership.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MorphIndex {
    pub items: Vec<MorphGroup>,
    groups_by_label: HashMap<String, usize>,
    letter_map: BTreeMap<char, Vec<usize>>,
}

impl MorphIndex {
    /// Number of groups in the index.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a group by its exact label.
    pub fn group(&self, label: &str) -> Option<&MorphGroup> {
        self.groups_by_label.get(label).map(|&i| &self.items[i])
    }

    /// The groups bucketed under one initial, in global sorted order.
    pub fn bucket(&self, initial: char) -> Vec<&MorphGroup> {
        self.letter_map
            .get(&initial)
            .map(|ids| ids.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// The initials that have at least one group, in ascending order
    /// (`'#'` sorts before the letters).
    pub fn initials(&self) -> Vec<char> {
        self.letter_map.keys().copied().collect()
    }
}

/// Build a morphology index over `words` for the given field.
///
/// A word is skipped for this index when its label renders empty, equals the
/// literal placeholder `"无"`, or is present in `skip` (callers use the skip
/// set to drop dataset placeholders such as `"词干"` from the root index).
/// List-valued fields are joined with `" + "` before grouping; grouping is by
/// the exact resulting string.
pub fn build_index(words: &[WordEntry], field: MorphField, skip: &HashSet<String>) -> MorphIndex {
    let mut items: Vec<MorphGroup> = Vec::new();
    let mut groups_by_label: HashMap<String, usize> = HashMap::new();

    for word in words {
        let label = label_text(word.morph_value(field));
        if label.is_empty() || label == PLACEHOLDER_NONE || skip.contains(&label) {
            continue;
        }

        match groups_by_label.get(&label) {
            Some(&i) => {
                let group = &mut items[i];
                // First non-empty gloss wins; once set it is never overwritten.
                if group.gloss.is_empty() {
                    let candidate = normalize_text(word.morph_gloss(field));
                    if !candidate.is_empty() {
                        group.gloss = candidate;
                    }
                }
                group.words.push(word.clone());
            }
            None => {
                groups_by_label.insert(label.clone(), items.len());
                items.push(MorphGroup {
                    gloss: normalize_text(word.morph_gloss(field)),
                    label,
                    words: vec![word.clone()],
                });
            }
        }
    }

    // Labels are unique keys, but two labels differing only in case compare
    // equal under the collation key; tiebreak on the raw label so the order
    // stays deterministic.
    items.sort_by(|a, b| {
        sort_key(&a.label)
            .cmp(&sort_key(&b.label))
            .then_with(|| a.label.cmp(&b.label))
    });

    let groups_by_label = items
        .iter()
        .enumerate()
        .map(|(i, g)| (g.label.clone(), i))
        .collect();

    let mut letter_map: BTreeMap<char, Vec<usize>> = BTreeMap::new();
    for (i, group) in items.iter().enumerate() {
        letter_map.entry(initial_of(&group.label)).or_default().push(i);
    }

    MorphIndex {
        items,
        groups_by_label,
        letter_map,
    }
}
