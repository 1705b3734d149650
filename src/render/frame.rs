//! Frame text composition. Every function here is pure: same inputs, same
//! bytes out, so a snapshot can be re-rendered at will.

use std::fmt::Write;

use crate::{
    core::{
        color::{AnsiCode, colorize, colorize_bold},
        constants::{BAR_GLYPH, TIMESTAMP_CENTER, TITLE_CENTER},
        dataset::{Dataset, Header},
        palette::{CategoryPalette, ColorId},
        snapshot::Snapshot,
    },
    render::axis::AxisPlan,
};

// --- Helpers ---

/// Spaces that put the middle of `text` on column `center`.
#[inline]
fn indent(text: &str, center: usize) -> String {
    " ".repeat(center.saturating_sub(text.chars().count() / 2))
}

/// Title and timestamp, centred.
#[must_use]
pub fn compose_header(title: &str, timestamp: &str) -> String {
    let white = AnsiCode::white();
    let mut out = String::from("\n");
    let _ = writeln!(
        out,
        "{}{}\n",
        indent(title, TITLE_CENTER),
        colorize_bold(&white, title)
    );
    let _ = writeln!(
        out,
        "{}{}{}\n",
        indent(timestamp, TIMESTAMP_CENTER),
        colorize_bold(&white, "Timestamp: "),
        colorize_bold(&white, timestamp)
    );
    out
}

/// One line per bar, each followed by a blank line.
#[must_use]
pub fn compose_bars(snapshot: &Snapshot, palette: &CategoryPalette) -> String {
    let mut out = String::new();
    for bar in snapshot.bars() {
        let color = palette.lookup(&bar.category).ansi();
        let _ = writeln!(
            out,
            "{} {} [{}]\n",
            colorize(&color, &BAR_GLYPH.repeat(bar.columns())),
            colorize(&color, &bar.label),
            bar.value
        );
    }
    out
}

/// Axis, tick labels, value label and source.
#[must_use]
pub fn compose_footer(axis: &AxisPlan, header: &Header) -> String {
    let yellow = AnsiCode::yellow();
    format!(
        "{}\n{}\n{}\n\n{}\n",
        axis.axis_line(),
        colorize(&yellow, &axis.label_line()),
        colorize_bold(&yellow, &header.label),
        colorize_bold(&AnsiCode::white(), &header.source)
    )
}

/// Colour key. Collapses to a single `All` entry once the palette overflowed.
#[must_use]
pub fn compose_legend(palette: &CategoryPalette) -> String {
    if palette.overflowed() {
        return format!(
            "{}\n",
            colorize(&ColorId::Overflow.ansi(), &format!("{BAR_GLYPH}: All"))
        );
    }
    let mut out = String::new();
    for (name, id) in palette.entries() {
        out.push_str(&colorize_bold(&id.ansi(), &format!("{BAR_GLYPH}: {name}")));
        out.push_str("  ");
    }
    out.push('\n');
    out
}

/// A complete frame for one snapshot.
#[must_use]
pub fn compose_frame(header: &Header, snapshot: &Snapshot, palette: &CategoryPalette) -> String {
    let mut out = compose_header(&header.title, snapshot.timestamp());
    out.push_str(&compose_bars(snapshot, palette));
    if let Some(axis) = AxisPlan::for_snapshot(snapshot) {
        out.push_str(&compose_footer(&axis, header));
    }
    out.push_str(&compose_legend(palette));
    out
}

/// Overview printed before the race starts.
#[must_use]
pub fn compose_intro(dataset: &Dataset, fps: u64) -> String {
    let header = &dataset.header;
    let palette = dataset.palette();

    let mut msg = String::new();
    let _ = write!(msg, "\n\n>>> We have {} charts.\n\n", dataset.len());
    let _ = write!(msg, ">>> Animation speed is {fps}");
    let _ = write!(msg, "\n>>> Title: {}", header.title);
    let _ = write!(msg, "\n>>> Value: {}", header.label);
    let _ = write!(msg, "\n>>> Source: {}", header.source);
    let _ = write!(
        msg,
        "\n\n>>> We have {} categories among the data:\n",
        palette.len()
    );

    let mut out = colorize_bold(&AnsiCode::green(), &msg);
    out.push('\n');
    for (name, id) in palette.entries() {
        out.push_str(&colorize_bold(&id.ansi(), &format!("[{name}]")));
        out.push(' ');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::Bar;

    fn header() -> Header {
        Header {
            title: "Cities".into(),
            label: "Population".into(),
            source: "UN".into(),
        }
    }

    fn ranked(values: &[(&str, &str, i64)], palette: &mut CategoryPalette) -> Snapshot {
        let mut s = Snapshot::new("1990", values.len());
        for (label, cat, value) in values {
            palette.color_for(cat);
            s.push(Bar::new(*label, *cat, *value));
        }
        s.rank();
        s
    }

    #[test]
    fn header_is_centred() {
        let text = compose_header("Cities", "1990");
        let title_line = text.lines().nth(1).unwrap();
        assert!(title_line.starts_with(&" ".repeat(77)));
        assert!(!title_line.starts_with(&" ".repeat(78)));
        assert!(text.contains("Timestamp: "));
    }

    #[test]
    fn bars_are_coloured_by_category() {
        let mut palette = CategoryPalette::new();
        let s = ranked(&[("Tokyo", "Asia", 40), ("Paris", "Europe", 20)], &mut palette);
        let text = compose_bars(&s, &palette);

        let asia = palette.lookup("Asia").ansi();
        let expected_first = format!(
            "{} {} [40]",
            colorize(&asia, &BAR_GLYPH.repeat(150)),
            colorize(&asia, "Tokyo")
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], expected_first);
        assert_eq!(lines[1], "");
        assert!(lines[2].contains(&BAR_GLYPH.repeat(75)));
        assert!(!lines[2].contains(&BAR_GLYPH.repeat(76)));
        assert!(lines[2].ends_with("[20]"));
    }

    #[test]
    fn frame_contains_axis_and_footer() {
        let mut palette = CategoryPalette::new();
        let s = ranked(&[("a", "x", 980), ("b", "y", 120)], &mut palette);
        let frame = compose_frame(&header(), &s, &palette);

        assert!(frame.contains(&AxisPlan::for_snapshot(&s).unwrap().axis_line()));
        assert!(frame.contains("990"));
        assert!(frame.contains("Population"));
        assert!(frame.contains("UN"));
        assert!(frame.contains(&format!("{BAR_GLYPH}: x")));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut palette = CategoryPalette::new();
        let s = ranked(&[("a", "x", 5), ("b", "x", 5)], &mut palette);
        assert_eq!(
            compose_frame(&header(), &s, &palette),
            compose_frame(&header(), &s, &palette)
        );
    }

    #[test]
    fn overflowed_legend_has_one_entry() {
        let mut palette = CategoryPalette::new();
        for i in 0..20 {
            palette.color_for(&format!("cat{i}"));
        }
        let legend = compose_legend(&palette);
        assert_eq!(legend.matches(BAR_GLYPH).count(), 1);
        assert!(legend.contains(": All"));
        assert!(!legend.contains("cat"));
    }

    #[test]
    fn legend_lists_categories_in_registration_order() {
        let mut palette = CategoryPalette::new();
        palette.color_for("Europe");
        palette.color_for("Asia");
        let legend = compose_legend(&palette);
        let europe = legend.find("Europe").unwrap();
        let asia = legend.find("Asia").unwrap();
        assert!(europe < asia);
        assert_eq!(legend.matches(BAR_GLYPH).count(), 2);
    }
}
