use crate::processing::histogram::Histogram;

/// Glyph ramp for inline histograms: empty through full block.
const GLYPH_LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a histogram as one glyph per bin, each count normalized to the
/// ramp relative to the fullest bin. Deterministic in the counts.
pub fn inline_glyphs(hist: &Histogram) -> String {
    let max = hist.max_count();
    if max == 0 {
        return String::new();
    }
    hist.counts
        .iter()
        .map(|&count| {
            let level = (count as f64 / max as f64 * 8.0) as usize;
            GLYPH_LEVELS[level.min(GLYPH_LEVELS.len() - 1)]
        })
        .collect()
}

/// Render a histogram as one row per bin: the bin's edge range and a bar
/// scaled to `width` characters. Bins with members that would scale to an
/// empty bar get a floor marker so they stay visible.
pub fn detailed_lines(hist: &Histogram, width: usize) -> Vec<String> {
    let max = hist.max_count().max(1);
    hist.counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar_len = (count as f64 / max as f64 * width as f64) as usize;
            let bar = if bar_len > 0 {
                "█".repeat(bar_len)
            } else if count > 0 {
                "▁".to_string()
            } else {
                String::new()
            };
            let label = format!("{:.2}-{:.2}", hist.edges[i], hist.edges[i + 1]);
            format!("{label:15} |{bar}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(counts: Vec<usize>) -> Histogram {
        let bins = counts.len();
        Histogram {
            edges: (0..=bins).map(|i| i as f64).collect(),
            counts,
            bin_width: 1.0,
        }
    }

    #[test]
    fn one_glyph_per_bin() {
        let h = hist(vec![1, 0, 3, 2]);
        let glyphs = inline_glyphs(&h);
        assert_eq!(glyphs.chars().count(), 4);
    }

    #[test]
    fn fullest_bin_gets_full_block_and_empty_bin_a_space() {
        let h = hist(vec![0, 4, 2]);
        let glyphs: Vec<char> = inline_glyphs(&h).chars().collect();
        assert_eq!(glyphs[0], ' ');
        assert_eq!(glyphs[1], '█');
        assert_eq!(glyphs[2], '▄');
    }

    #[test]
    fn rendering_is_deterministic() {
        let h = hist(vec![3, 1, 4, 1, 5]);
        assert_eq!(inline_glyphs(&h), inline_glyphs(&h));
        assert_eq!(detailed_lines(&h, 20), detailed_lines(&h, 20));
    }

    #[test]
    fn detailed_bars_scale_to_width() {
        let h = hist(vec![10, 5, 0]);
        let lines = detailed_lines(&h, 20);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(&"█".repeat(20)));
        assert!(lines[1].ends_with(&"█".repeat(10)));
        assert!(lines[2].ends_with('|'));
    }

    #[test]
    fn tiny_nonzero_bins_keep_a_floor_marker() {
        let h = hist(vec![100, 1]);
        let lines = detailed_lines(&h, 10);
        assert!(lines[1].ends_with('▁'));
    }

    #[test]
    fn labels_carry_bin_edges() {
        let h = hist(vec![2, 2]);
        let lines = detailed_lines(&h, 10);
        assert!(lines[0].contains("0.00-1.00"));
        assert!(lines[1].contains("1.00-2.00"));
    }
}
