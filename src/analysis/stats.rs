//! Composition statistics: GC content and per-base counts

use serde::{Deserialize, Serialize};
use std::fmt;

use super::sequence::Sequence;

/// Count of each canonical base. Lowercase and other characters are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
}

impl BaseCounts {
    pub fn get(&self, base: char) -> Option<usize> {
        match base {
            'A' => Some(self.a),
            'T' => Some(self.t),
            'C' => Some(self.c),
            'G' => Some(self.g),
            _ => None,
        }
    }
}

/// Composition of one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    /// Percentage in [0, 100]
    pub gc_content: f64,
    pub gc_count: usize,
    pub at_count: usize,
    pub total_length: usize,
    pub per_base_counts: BaseCounts,
}

impl CompositionStats {
    /// Per-base counts keyed for a bar chart, in display order.
    pub fn base_series(&self) -> [(&'static str, usize); 4] {
        let b = &self.per_base_counts;
        [("A", b.a), ("T", b.t), ("C", b.c), ("G", b.g)]
    }
}

impl fmt::Display for CompositionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GC Content: {:.2}%", self.gc_content)?;
        writeln!(f, "GC Count: {}", self.gc_count)?;
        writeln!(f, "AT Count: {}", self.at_count)?;
        write!(f, "Total Length: {}", self.total_length)?;
        for (base, count) in self.base_series() {
            write!(f, "\n{}: {}", base, count)?;
        }
        Ok(())
    }
}

/// Percentage of the sequence that is `G` or `C`; exactly 0 for an empty sequence.
pub fn gc_content(seq: &Sequence) -> f64 {
    composition_stats(seq).gc_content
}

/// Compute all counts in a single pass.
pub fn composition_stats(seq: &Sequence) -> CompositionStats {
    let mut counts = BaseCounts::default();
    let mut total_length = 0usize;

    for c in seq.as_str().chars() {
        total_length += 1;
        match c {
            'A' => counts.a += 1,
            'T' => counts.t += 1,
            'C' => counts.c += 1,
            'G' => counts.g += 1,
            _ => {}
        }
    }

    let gc_count = counts.g + counts.c;
    let at_count = counts.a + counts.t;
    let gc_content = if total_length > 0 {
        (gc_count as f64 / total_length as f64) * 100.0
    } else {
        0.0
    };

    CompositionStats {
        gc_content,
        gc_count,
        at_count,
        total_length,
        per_base_counts: counts,
    }
}
