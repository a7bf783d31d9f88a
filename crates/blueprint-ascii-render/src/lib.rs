use std::ops::RangeInclusive;

use blueprint_layout::{Canvas, CubicPath, EdgeLabel, LayoutNode, Point};

#[derive(Debug, Clone)]
pub struct AsciiRenderOptions {
    /// View-space pixels covered by one character cell.
    pub cell_width: f32,
    pub cell_height: f32,
    pub max_width: usize,
    pub max_height: usize,
}

impl Default for AsciiRenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 10.0,
            cell_height: 20.0,
            max_width: 240,
            max_height: 80,
        }
    }
}

pub fn render_ascii(canvas: &Canvas, options: &AsciiRenderOptions) -> String {
    if canvas.nodes.is_empty() {
        return String::new();
    }

    let grid = Grid::for_canvas(canvas, options);
    let mut cells = vec![vec![' '; grid.width]; grid.height];

    // Edges first so screens appear on top.
    for edge in &canvas.edges {
        draw_curve(&mut cells, &edge.path, &grid);
    }

    for node in &canvas.nodes {
        draw_node(&mut cells, node, &grid);
    }

    // Labels last; they sit on top of whatever the curve crosses.
    for label in canvas.edges.iter().filter_map(|edge| edge.label.as_ref()) {
        draw_label(&mut cells, label, &grid);
    }

    cells
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

struct Grid {
    scale: f32,
    cell_width: f32,
    cell_height: f32,
    width: usize,
    height: usize,
}

impl Grid {
    fn for_canvas(canvas: &Canvas, options: &AsciiRenderOptions) -> Self {
        let (view_w, view_h) = canvas.view_size();
        let cell_width = options.cell_width.max(1.0);
        let cell_height = options.cell_height.max(1.0);
        let width = ((view_w / cell_width).ceil() as usize).clamp(1, options.max_width.max(1));
        let height = ((view_h / cell_height).ceil() as usize).clamp(1, options.max_height.max(1));
        Self {
            scale: canvas.scale(),
            cell_width,
            cell_height,
            width,
            height,
        }
    }

    fn map_point(&self, point: Point) -> (i32, i32) {
        let x = (point.x * self.scale / self.cell_width).round() as i32;
        let y = (point.y * self.scale / self.cell_height).round() as i32;
        (x, y)
    }

    fn max_samples(&self) -> i64 {
        2 * (self.width + self.height) as i64
    }
}

/// Part of `start..=end` that lands on a grid axis of `len` cells.
fn visible_span(start: i32, end: i32, len: usize) -> Option<RangeInclusive<i32>> {
    let last = i32::try_from(len).unwrap_or(i32::MAX).saturating_sub(1);
    let (from, to) = (start.max(0), end.min(last));
    (from <= to).then_some(from..=to)
}

fn draw_curve(cells: &mut [Vec<char>], path: &CubicPath, grid: &Grid) {
    let (x1, y1) = grid.map_point(path.start);
    let (x2, y2) = grid.map_point(path.end);
    // Samples past twice the grid perimeter cannot reach a new cell.
    let span = (i64::from(x2) - i64::from(x1))
        .abs()
        .max((i64::from(y2) - i64::from(y1)).abs());
    let steps = (span * 2).clamp(1, grid.max_samples());

    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let (x, y) = grid.map_point(path.point_at(t));
        set_cell(cells, x, y, '.');
    }

    // One cell outside the target so the screen border does not cover it.
    if path.end_direction().x < 0.0 {
        put_cell(cells, x2.saturating_add(1), y2, '<');
    } else {
        put_cell(cells, x2.saturating_sub(1), y2, '>');
    }
}

fn draw_node(cells: &mut [Vec<char>], node: &LayoutNode, grid: &Grid) {
    let (left, top) = grid.map_point(Point::new(node.x, node.y));
    let (right, bottom) = grid.map_point(Point::new(node.right(), node.bottom()));
    let right = right.max(left.saturating_add(2));
    let bottom = bottom.max(top.saturating_add(2));

    let (Some(xs), Some(ys)) = (
        visible_span(left, right, grid.width),
        visible_span(top, bottom, grid.height),
    ) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            let on_x_edge = x == left || x == right;
            let on_y_edge = y == top || y == bottom;
            let ch = match (on_x_edge, on_y_edge) {
                (true, true) => '+',
                (false, true) => '-',
                (true, false) => '|',
                (false, false) => ' ',
            };
            put_cell(cells, x, y, ch);
        }
    }

    let inner_left = left.saturating_add(1);
    let available = (right.saturating_sub(left).saturating_sub(1)).max(0) as usize;
    let id_line = format!("ID: {}", node.id);
    write_centered(cells, &node.title, inner_left, top.saturating_add(1), available);
    write_centered(cells, &id_line, inner_left, top.saturating_add(2), available);
}

fn draw_label(cells: &mut [Vec<char>], label: &EdgeLabel, grid: &Grid) {
    let (cx, cy) = grid.map_point(label.center());
    let text = format!("[{}]", label.text);
    let len = text.chars().count() as i32;
    let start = cx.saturating_sub(len / 2);
    for (idx, ch) in text.chars().enumerate() {
        put_cell(cells, start.saturating_add(idx as i32), cy, ch);
    }
}

fn write_centered(cells: &mut [Vec<char>], text: &str, left: i32, y: i32, available: usize) {
    if available == 0 {
        return;
    }
    let text: String = text.chars().take(available).collect();
    let offset = (available - text.chars().count()) / 2;
    for (idx, ch) in text.chars().enumerate() {
        let column = i32::try_from(offset + idx).unwrap_or(i32::MAX);
        put_cell(cells, left.saturating_add(column), y, ch);
    }
}

fn cell_mut(cells: &mut [Vec<char>], x: i32, y: i32) -> Option<&mut char> {
    if x < 0 || y < 0 {
        return None;
    }
    cells.get_mut(y as usize)?.get_mut(x as usize)
}

fn put_cell(cells: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if let Some(cell) = cell_mut(cells, x, y) {
        *cell = ch;
    }
}

fn set_cell(cells: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if let Some(cell) = cell_mut(cells, x, y) {
        *cell = merge_char(*cell, ch);
    }
}

fn merge_char(existing: char, incoming: char) -> char {
    match existing {
        ' ' => incoming,
        '<' | '>' => existing,
        _ => incoming,
    }
}
