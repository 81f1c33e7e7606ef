use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CollisionType, GameState, Position};
use crate::metrics::GameMetrics;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Body,
    Food,
    Wall,
    Empty,
}

impl Cell {
    /// Classify a cell; the head wins over everything else
    pub fn at(state: &GameState, pos: Position) -> Self {
        if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.contains(pos) {
            Cell::Body
        } else if state.food == Some(pos) {
            Cell::Food
        } else if state.is_wall(pos) {
            Cell::Wall
        } else {
            Cell::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Cell::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            Cell::Food => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Wall => Span::styled("██", Style::default().fg(Color::Gray)),
            Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame; `status` is an optional extra header entry (e.g. "PAUSED")
    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        status: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics, status), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let body = if !state.is_alive {
            self.render_game_over(state, metrics)
        } else if state.is_won() {
            self.render_board_cleared(state)
        } else {
            self.render_grid(state)
        };
        frame.render_widget(body, game_area);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// One line of spans per grid row
    pub fn grid_lines(state: &GameState) -> Vec<Line<'static>> {
        (0..state.grid_height as i32)
            .map(|row| {
                (0..state.grid_width as i32)
                    .map(|col| Cell::at(state, Position::new(row, col)).span())
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect()
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        Paragraph::new(Self::grid_lines(state))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        state: &GameState,
        metrics: &GameMetrics,
        status: Option<&str>,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(state.steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
        ];
        if let Some(status) = status {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                status.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let cause = state
            .collision
            .map(|collision| format!("The snake {collision}"))
            .unwrap_or_default();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "Deaths: boundary {} / wall {} / self {}",
                    metrics.deaths_by(CollisionType::Boundary),
                    metrics.deaths_by(CollisionType::Wall),
                    metrics.deaths_by(CollisionType::SelfCollision),
                ),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            restart_hint(),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_board_cleared(&self, state: &GameState) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "BOARD CLEARED",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "Score {} with a snake of length {}",
                state.score,
                state.snake.len()
            )),
            Line::from(""),
            restart_hint(),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("hjkl", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn restart_hint() -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::Gray)),
        Span::styled(
            "R",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Q",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to quit", Style::default().fg(Color::Gray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn sample_state() -> GameState {
        GameState::new(
            Snake::new(Position::new(1, 2), Direction::Right, 2),
            Some(Position::new(0, 0)),
            [Position::new(2, 2)].into_iter().collect(),
            4,
            3,
        )
    }

    #[test]
    fn test_cell_classification() {
        let state = sample_state();

        assert_eq!(Cell::at(&state, Position::new(1, 2)), Cell::Head);
        assert_eq!(Cell::at(&state, Position::new(1, 1)), Cell::Body);
        assert_eq!(Cell::at(&state, Position::new(0, 0)), Cell::Food);
        assert_eq!(Cell::at(&state, Position::new(2, 2)), Cell::Wall);
        assert_eq!(Cell::at(&state, Position::new(2, 3)), Cell::Empty);
    }

    #[test]
    fn test_grid_lines_cover_board() {
        let state = sample_state();
        let lines = Renderer::grid_lines(&state);

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.spans.len() == 4));
        assert_eq!(lines[0].spans[0].content, "O ");
        assert_eq!(lines[1].spans[2].content, "■ ");
        assert_eq!(lines[2].spans[2].content, "██");
    }

    #[test]
    fn test_render_game_over_names_cause() {
        let mut state = sample_state();
        state.is_alive = false;
        state.collision = Some(CollisionType::Wall);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &state, &GameMetrics::new(), Some("PAUSED")))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("hit a wall"));
        assert!(screen.contains("PAUSED"));
    }
}
