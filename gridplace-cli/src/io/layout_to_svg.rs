use gridplace::config::PlacerConfig;
use gridplace::entities::{PartToPlace, Snapshot};
use gridplace::geometry::primitives::{Point, Rect};
use gridplace::place::{PlacementOutcome, SizeEstimator};
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text, Title};

use crate::io::svg_util::SvgDrawOptions;

/// A component drawn on the sheet: its refdes, bare footprint and margin-expanded footprint
struct DrawnComponent {
    refdes: String,
    footprint: Rect,
    margin_box: Rect,
}

fn drawn_component(
    refdes: &str,
    origin: Point,
    kind: &str,
    width: Option<f64>,
    height: Option<f64>,
    estimator: &SizeEstimator,
    config: &PlacerConfig,
) -> Option<DrawnComponent> {
    let size = estimator.estimate(kind, width, height);
    Some(DrawnComponent {
        refdes: refdes.to_string(),
        footprint: Rect::from_footprint(origin, size.width, size.height, 0.0).ok()?,
        margin_box: Rect::from_footprint(origin, size.width, size.height, config.margin).ok()?,
    })
}

/// Renders the existing components of `snapshot` and the newly placed `parts` on one sheet.
pub fn layout_to_svg(
    snapshot: Option<&Snapshot>,
    parts: &[PartToPlace],
    outcome: &PlacementOutcome,
    config: &PlacerConfig,
    options: SvgDrawOptions,
) -> Document {
    let theme = options.theme.get_theme();
    let estimator = SizeEstimator::new(config.grid_step);

    let existing = snapshot
        .map(|s| s.components.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|c| {
            drawn_component(&c.refdes, c.position?, &c.kind, c.width, c.height, &estimator, config)
        })
        .collect_vec();

    let placed = parts
        .iter()
        .filter_map(|p| {
            let placement = outcome.placements.get(&p.refdes)?;
            drawn_component(
                &p.refdes,
                placement.position(),
                &p.kind,
                p.width,
                p.height,
                &estimator,
                config,
            )
        })
        .collect_vec();

    // the sheet always spans [0, sheet_max_x] horizontally
    let sheet = Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: config.sheet_max_x,
        y_max: config.wrap_y_step,
    };
    let bbox = existing
        .iter()
        .chain(placed.iter())
        .map(|d| d.margin_box)
        .fold(sheet, Rect::bounding_rect);
    let pad = config.grid_step;
    let vbox = (
        bbox.x_min - pad,
        bbox.y_min - pad,
        bbox.width() + 2.0 * pad,
        bbox.height() + 2.0 * pad,
    );
    let stroke_width = f64::min(vbox.2, vbox.3) * 0.001 * theme.stroke_width_multiplier;

    let sheet_group = {
        let mut group = Group::new().set("id", "sheet").add(
            Rectangle::new()
                .set("x", vbox.0)
                .set("y", vbox.1)
                .set("width", vbox.2)
                .set("height", vbox.3)
                .set("fill", theme.sheet_fill),
        );
        if options.sheet_limit {
            group = group.add(
                Line::new()
                    .set("x1", config.sheet_max_x)
                    .set("y1", vbox.1)
                    .set("x2", config.sheet_max_x)
                    .set("y2", vbox.1 + vbox.3)
                    .set("stroke", theme.limit_stroke)
                    .set("stroke-width", 2.0 * stroke_width)
                    .set("stroke-dasharray", format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width)),
            );
        }
        group
    };

    let component_group = |id: &str, components: &[DrawnComponent], fill: &str| {
        let mut group = Group::new().set("id", id);
        for d in components {
            let Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            } = d.footprint;
            let mut comp = Group::new()
                .set("id", format!("{id}_{}", d.refdes))
                .add(Title::new(format!(
                    "{}, bbox: [x_min: {x_min:.3}, y_min: {y_min:.3}, x_max: {x_max:.3}, y_max: {y_max:.3}]",
                    d.refdes
                )))
                .add(svg_rect(&d.footprint).set("fill", fill).set("stroke", "black").set(
                    "stroke-width",
                    stroke_width,
                ));
            if options.margins {
                comp = comp.add(
                    svg_rect(&d.margin_box)
                        .set("fill", "none")
                        .set("stroke", theme.margin_stroke)
                        .set("stroke-width", stroke_width)
                        .set("stroke-dasharray", format!("{} {}", 2.0 * stroke_width, stroke_width)),
                );
            }
            if options.labels {
                let center = (
                    (d.footprint.x_min + d.footprint.x_max) / 2.0,
                    (d.footprint.y_min + d.footprint.y_max) / 2.0,
                );
                let font_size = f64::min(d.footprint.height() * 0.6, d.footprint.width() * 0.3);
                comp = comp.add(
                    Text::new(d.refdes.clone())
                        .set("x", center.0)
                        .set("y", center.1)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            group = group.add(comp);
        }
        group
    };

    Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(component_group("existing", &existing, theme.existing_fill))
        .add(component_group("placed", &placed, theme.placed_fill))
}

fn svg_rect(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height())
}
