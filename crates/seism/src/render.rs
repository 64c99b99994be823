use console::Style;
use seism_feed::Quake;
use seism_view::{format_date, format_magnitude, format_time, magnitude_bucket, split_place};
use tabled::{Table, Tabled, settings::Style as TableStyle};

#[derive(Tabled)]
pub struct Row {
    #[tabled(rename = "Mag")]
    magnitude: String,
    #[tabled(rename = "Offset")]
    offset: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Details")]
    details: String,
}

/// Map a magnitude bucket key (1..=10) to its display color.
///
/// The palette lives here with the rest of the shell's resources; the deriver
/// only ever hands back the key.
fn bucket_style(bucket: u8) -> Style {
    match bucket {
        1 => Style::new().color256(67),
        2 => Style::new().color256(72),
        3 => Style::new().color256(77),
        4 => Style::new().color256(142),
        5 => Style::new().color256(178),
        6 => Style::new().color256(208),
        7 => Style::new().color256(202),
        8 => Style::new().color256(196),
        9 => Style::new().color256(160),
        // 10 plus
        _ => Style::new().color256(124),
    }
}

fn row(quake: &Quake) -> Row {
    let (offset, location) = split_place(&quake.place);
    let bucket = magnitude_bucket(quake.magnitude);
    Row {
        magnitude: bucket_style(bucket)
            .apply_to(format_magnitude(quake.magnitude))
            .to_string(),
        offset,
        location,
        date: format_date(quake.time_ms),
        time: format_time(quake.time_ms),
        details: quake.details_url.clone(),
    }
}

pub fn table(quakes: &[Quake]) -> Table {
    let mut table = Table::new(quakes.iter().map(|q| row(q)));
    table.with(TableStyle::blank());
    table
}
