use crate::entities::CutPlan;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Renders a plan as a top view of the stock block: the width axis runs left to right,
/// rows advance top to bottom along the length axis. Kerf bands mark every saw pass.
/// Overflowing rows and infeasible plans draw past the stock outline.
pub fn plan_to_svg(plan: &CutPlan, options: SvgDrawOptions, title: &str) -> Document {
    let stock = plan.stock;
    let theme = &options.theme;

    // Extend the canvas when rows overflow the width or the plan overruns the length.
    let extent_x = plan
        .rows
        .iter()
        .map(|r| r.used_width(stock.blade_kerf))
        .fold(stock.width, f32::max);
    let extent_y = f32::max(stock.length, plan.consumed_length());

    let stroke_width = f32::min(extent_x, extent_y) * 0.001 * theme.stroke_width_multiplier;
    let label_size = 0.035 * f32::min(stock.width, stock.length);

    let label = {
        //print some information above the left top of the stock block
        let label_content = format!(
            "stock: {:.0} x {:.0} x {:.0} | kerf: {:.1} | {} | consumed: {:.1} | remainder: {:.1} | {}",
            stock.width,
            stock.length,
            stock.height,
            stock.blade_kerf,
            plan.strategy,
            plan.consumed_length(),
            plan.remainder(),
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * f32::min(extent_x, extent_y))
            .set("font-size", f32::min(extent_x, extent_y) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw stock block
    let stock_group = {
        Group::new()
            .set("id", "stock")
            .add(svg_util::data_to_path(
                svg_util::rect_data(0.0, 0.0, stock.width, stock.length),
                &[
                    ("fill", &*format!("{}", theme.stock_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(Title::new(format!(
                "stock, {:.0} x {:.0} x {:.0}",
                stock.width, stock.length, stock.height
            )))
    };

    //draw rows: parts, kerf gaps and the cross-cut sealing each row
    let mut rows_group = Group::new().set("id", "rows");
    let mut waste_group = Group::new().set("id", "waste");
    let mut cursor_y = 0.0;
    for (row_idx, row) in plan.rows.iter().enumerate() {
        let mut row_group = Group::new().set("id", format!("row_{row_idx}"));
        let row_length = row.effective_length;

        let mut cursor_x = 0.0;
        for (part_idx, part) in row.items.iter().enumerate() {
            if part_idx > 0 {
                //kerf gap of the rip cut separating this part from its neighbour
                row_group = row_group.add(svg_util::data_to_path(
                    svg_util::rect_data(cursor_x, cursor_y, stock.blade_kerf, row_length),
                    &[("fill", &*format!("{}", theme.kerf_fill))],
                ));
                cursor_x += stock.blade_kerf;
            }

            let fill = theme.part_fill(part.id);
            row_group = row_group.add(
                svg_util::data_to_path(
                    svg_util::rect_data(cursor_x, cursor_y, part.width, part.length),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", "0.8"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                )
                .add(Title::new(format!(
                    "part, id: {}, {} x {} x {}{}",
                    part.id,
                    part.width,
                    part.length,
                    part.thickness,
                    if part.rotated { ", rotated" } else { "" }
                ))),
            );

            if options.part_labels {
                row_group = row_group.add(
                    Text::new(format!("ID{}", part.id))
                        .set("x", cursor_x + 0.5 * part.width)
                        .set("y", cursor_y + 0.5 * part.length)
                        .set("font-size", label_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                );
            }
            cursor_x += part.width;
        }

        //side offcut left at the open end of the row
        let lateral_waste = row.lateral_waste(stock.width, stock.blade_kerf);
        if options.draw_waste && lateral_waste > 0.0 {
            let stroke = svg_util::change_brightness(theme.waste_fill, 0.5);
            waste_group = waste_group.add(
                svg_util::data_to_path(
                    svg_util::rect_data(cursor_x, cursor_y, lateral_waste, row_length),
                    &[
                        ("fill", &*format!("{}", theme.waste_fill)),
                        ("fill-opacity", "0.15"),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "side offcut, {:.1} x {:.1} x {:.0}",
                    lateral_waste, row_length, stock.height
                ))),
            );
            waste_group = waste_group.add(
                Text::new(format!("{lateral_waste:.0}"))
                    .set("x", cursor_x + 0.5 * lateral_waste)
                    .set("y", cursor_y + 0.5 * row_length)
                    .set("font-size", label_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", &*format!("{}", theme.waste_fill)),
            );
        }

        //cross-cut sealing the row
        cursor_y += row_length;
        row_group = row_group.add(svg_util::data_to_path(
            svg_util::rect_data(0.0, cursor_y, stock.width, stock.blade_kerf),
            &[("fill", &*format!("{}", theme.kerf_fill))],
        ));
        cursor_y += stock.blade_kerf;

        rows_group = rows_group.add(row_group);
    }

    //remnant of the block past the final cross-cut
    let remainder = plan.remainder();
    if options.draw_waste && remainder > 0.0 {
        let stroke = svg_util::change_brightness(theme.remnant_fill, 0.5);
        waste_group = waste_group.add(
            svg_util::data_to_path(
                svg_util::rect_data(0.0, cursor_y, stock.width, remainder),
                &[
                    ("fill", &*format!("{}", theme.remnant_fill)),
                    ("fill-opacity", "0.15"),
                    ("stroke", &*format!("{stroke}")),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "remnant, {:.0} x {:.1} x {:.0}",
                stock.width, remainder, stock.height
            ))),
        );
        waste_group = waste_group.add(
            Text::new(format!("{remainder:.0}"))
                .set("x", 0.5 * stock.width)
                .set("y", cursor_y + 0.5 * remainder)
                .set("font-size", label_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("fill", &*format!("{}", theme.remnant_fill)),
        );
    }

    let vbox_svg = (
        -0.05 * extent_x,
        -0.05 * extent_y,
        1.10 * extent_x,
        1.10 * extent_y,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(stock_group)
        .add(rows_group)
        .add(waste_group)
        .add(label)
}
