//! Play field rendering.
//!
//! World coordinates are scaled onto a cell buffer; platforms, fruit and
//! both actors are stamped into it and the buffer is written out row by
//! row as Paragraph widgets.

use super::game_common::{
    create_game_layout, info_line, render_game_over_modal, render_info_panel_frame,
    render_status_bar,
};
use crate::core::geometry::Rect as WorldRect;
use crate::entities::{Facing, FruitKind, Motion};
use crate::game::{GamePhase, Scene};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▓';
const PLATFORM_CHAR: char = '░';
const SURFACE_CHAR: char = '▀';

const DODO_COLOR: Color = Color::Rgb(170, 160, 150);
const BEAK_COLOR: Color = Color::Rgb(230, 180, 60);
const DUTCHMAN_COLOR: Color = Color::Rgb(70, 110, 170);
const PLATFORM_COLOR: Color = Color::Rgb(110, 85, 60);
const SURFACE_COLOR: Color = Color::Rgb(90, 160, 70);
const GROUND_COLOR: Color = Color::Rgb(80, 70, 55);

/// Render one frame of the game. `notice` replaces the status line while
/// playing, e.g. after a pickup.
pub fn render_game_scene(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    best_score: u32,
    notice: Option<&str>,
) {
    let title = format!(" Dodo - Level {}: {} ", scene.level, scene.level_name);
    let layout = create_game_layout(frame, area, &title, Color::LightYellow, 10, 22);

    render_play_field(frame, layout.content, scene);

    match scene.phase {
        GamePhase::Playing => render_status_bar(
            frame,
            layout.status_bar,
            notice.unwrap_or("Reach the right edge to move on"),
            if notice.is_some() {
                Color::LightGreen
            } else {
                Color::LightYellow
            },
            &[("[←/→]", "Move"), ("[↑/Space]", "Jump"), ("[Q]", "Quit")],
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            layout.status_bar,
            "Caught!",
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }

    render_info_panel(frame, layout.info_panel, scene, best_score);

    if scene.phase == GamePhase::GameOver {
        render_game_over_modal(frame, layout.content, scene.score, best_score);
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// World-to-cell mapping for one render.
struct Viewport {
    cols: usize,
    rows: usize,
    x_scale: f64,
    y_scale: f64,
}

impl Viewport {
    fn new(cols: u16, rows: u16, scene: &Scene) -> Self {
        Self {
            cols: cols as usize,
            rows: rows as usize,
            x_scale: cols as f64 / scene.world_width.max(1.0),
            y_scale: rows as f64 / scene.world_height.max(1.0),
        }
    }

    fn col(&self, x: f64) -> usize {
        ((x * self.x_scale).floor().max(0.0) as usize).min(self.cols.saturating_sub(1))
    }

    fn row(&self, y: f64) -> usize {
        ((y * self.y_scale).floor().max(0.0) as usize).min(self.rows.saturating_sub(1))
    }

    /// Inclusive cell span covered by a world rectangle, at least one cell.
    fn span(&self, rect: &WorldRect) -> (usize, usize, usize, usize) {
        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let c1 = self.col(rect.right() - 0.01).max(c0);
        let r1 = self.row(rect.bottom() - 0.01).max(r0);
        (c0, r0, c1, r1)
    }
}

fn fill(buffer: &mut [Vec<Cell>], view: &Viewport, rect: &WorldRect, ch: char, fg: Color) {
    if rect.right() <= 0.0 || rect.bottom() <= 0.0 {
        return;
    }
    let (c0, r0, c1, r1) = view.span(rect);
    for row in buffer.iter_mut().take(r1 + 1).skip(r0) {
        for cell in row.iter_mut().take(c1 + 1).skip(c0) {
            *cell = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }
}

fn put(buffer: &mut [Vec<Cell>], col: usize, row: usize, ch: char, fg: Color) {
    if let Some(cell) = buffer.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell = Cell {
            ch,
            fg,
            bg: Color::Reset,
        };
    }
}

fn fruit_style(kind: FruitKind) -> (char, Color) {
    match kind {
        FruitKind::Berry => ('•', Color::Magenta),
        FruitKind::Banana => (')', Color::Yellow),
        FruitKind::Melon => ('●', Color::Green),
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, scene: &Scene) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let view = Viewport::new(area.width, area.height, scene);
    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); view.cols]; view.rows];

    // Ground: everything at or below the ground line, with the bottom row
    // always drawn so a ground at the world edge stays visible.
    let ground_row = view.row(scene.ground_level);
    for row in buffer.iter_mut().skip(ground_row) {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: GROUND_CHAR,
                fg: GROUND_COLOR,
                bg: Color::Reset,
            };
        }
    }

    for platform in &scene.platforms {
        fill(&mut buffer, &view, &platform.rect, PLATFORM_CHAR, PLATFORM_COLOR);
        let (c0, r0, c1, _) = view.span(&platform.surface);
        for col in c0..=c1 {
            put(&mut buffer, col, r0, SURFACE_CHAR, SURFACE_COLOR);
        }
    }

    for fruit in &scene.fruit {
        let (ch, color) = fruit_style(fruit.kind);
        let (c0, r0, c1, r1) = view.span(&fruit.rect);
        put(&mut buffer, (c0 + c1) / 2, (r0 + r1) / 2, ch, color);
    }

    // Dutchman: solid body with a hat brim that leans the way he marches.
    let dutchman = &scene.dutchman;
    fill(&mut buffer, &view, &dutchman.rect, '█', DUTCHMAN_COLOR);
    let (c0, r0, c1, r1) = view.span(&dutchman.rect);
    let brim = if dutchman.marching_left { '◢' } else { '◣' };
    for col in c0..=c1 {
        put(&mut buffer, col, r0, brim, Color::DarkGray);
    }
    let stride = if dutchman.frame % 2 == 0 { '╱' } else { '╲' };
    put(&mut buffer, c0, r1, stride, DUTCHMAN_COLOR);
    put(&mut buffer, c1, r1, stride, DUTCHMAN_COLOR);

    // Dodo: body, a beak on the facing side and feet that alternate while
    // walking.
    let dodo = &scene.dodo;
    fill(&mut buffer, &view, &dodo.rect, '█', DODO_COLOR);
    let (c0, r0, c1, r1) = view.span(&dodo.rect);
    match dodo.facing {
        Facing::Right => put(&mut buffer, c1, r0, '▶', BEAK_COLOR),
        Facing::Left => put(&mut buffer, c0, r0, '◀', BEAK_COLOR),
    }
    let feet = match dodo.motion {
        Motion::Grounded if dodo.frame.0 % 2 == 1 => '╿',
        Motion::Grounded => '╽',
        Motion::Ascending | Motion::Falling => '˅',
    };
    if r1 > r0 {
        put(&mut buffer, (c0 + c1) / 2, r1, feet, BEAK_COLOR);
    }

    let score_text = format!("Score: {}", scene.score);
    for (i, ch) in score_text.chars().enumerate() {
        put(&mut buffer, 1 + i, 0, ch, Color::White);
    }

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &Scene, best_score: u32) {
    let inner = render_info_panel_frame(frame, area);

    let state = match scene.dodo.motion {
        Motion::Grounded => "Standing",
        Motion::Ascending => "Jumping",
        Motion::Falling => "Falling",
    };

    let mut lines: Vec<Line> = vec![
        info_line("Level: ", scene.level.to_string(), Color::LightYellow),
        info_line("", scene.level_name.to_string(), Color::LightYellow),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        info_line("Best: ", best_score.to_string(), Color::Yellow),
        info_line("Fruit left: ", scene.fruit.len().to_string(), Color::White),
        info_line("Dodo: ", state.to_string(), Color::White),
        Line::from(""),
        Line::from(Span::styled(
            "Fruit:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for kind in [FruitKind::Berry, FruitKind::Banana, FruitKind::Melon] {
        let (ch, color) = fruit_style(kind);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", ch), Style::default().fg(color)),
            Span::styled(
                format!("{} {}", kind.name(), kind.value()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
