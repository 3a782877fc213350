use crate::entities::LayoutResult;
use crate::fsize;
use crate::geometry::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Rectangle as SvgRect, Text, Title};

pub fn layout_to_svg(layout: &LayoutResult, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;

    //an empty layout still gets a drawable canvas
    let container = Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: fsize::max(layout.container_width, 1.0),
        y_max: fsize::max(layout.container_height, 1.0),
    };
    let vbox = container.scale(1.10);
    let min_dim = fsize::min(container.width(), container.height());

    let stroke_width = fsize::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the container
        let label_content = format!(
            "width: {:.3} | height: {:.3} | density: {:.3}% | {}",
            layout.container_width,
            layout.container_height,
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", container.x_min)
            .set("y", container.y_min - 0.5 * 0.025 * min_dim)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw container
    let container_group = Group::new()
        .set("id", "container")
        .add(
            SvgRect::new()
                .set("x", container.x_min)
                .set("y", container.y_min)
                .set("width", layout.container_width)
                .set("height", layout.container_height)
                .set("fill", format!("{}", theme.container_fill))
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "container, width: {:.3}, height: {:.3}",
            layout.container_width, layout.container_height
        )));

    //draw placed rectangles
    let rects_group = {
        let stroke_color = svg_util::change_brightness(theme.rect_fill, 0.5);
        let mut rects_group = Group::new().set("id", "rectangles");
        for (i, pr) in layout.positioned_rects.iter().enumerate() {
            let mut rect_group = Group::new()
                .set("id", format!("rect_{i}"))
                .add(
                    SvgRect::new()
                        .set("x", pr.x)
                        .set("y", pr.y)
                        .set("width", pr.width)
                        .set("height", pr.height)
                        .set("fill", format!("{}", theme.rect_fill))
                        .set("stroke", format!("{stroke_color}"))
                        .set("stroke-width", stroke_width)
                        .set("opacity", "0.9"),
                )
                .add(Title::new(format!(
                    "rect {i}, x: {:.3}, y: {:.3}, width: {:.3}, height: {:.3}",
                    pr.x, pr.y, pr.width, pr.height
                )));
            if options.labels {
                let font_size = fsize::min(pr.width, pr.height) * 0.3;
                rect_group = rect_group.add(
                    Text::new(format!("{}x{}", pr.width, pr.height))
                        .set("x", pr.x + 0.5 * pr.width)
                        .set("y", pr.y + 0.5 * pr.height)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            rects_group = rects_group.add(rect_group);
        }
        rects_group
    };

    let bbox_group = match (options.bbox, layout.bbox()) {
        (true, Some(bbox)) => Some(
            Group::new().set("id", "bbox").add(
                SvgRect::new()
                    .set("x", bbox.x_min)
                    .set("y", bbox.y_min)
                    .set("width", bbox.width())
                    .set("height", bbox.height())
                    .set("fill", "none")
                    .set("stroke", format!("{}", theme.bbox_stroke))
                    .set("stroke-width", stroke_width)
                    .set("stroke-dasharray", format!("{}", 5.0 * stroke_width))
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round"),
            ),
        ),
        _ => None,
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(container_group)
        .add(rects_group);

    if let Some(bbox_group) = bbox_group {
        document = document.add(bbox_group);
    }

    document.add(label)
}
