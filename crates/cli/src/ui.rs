//! Ratatui rendering of the world grid, player status, and message log.

use anyhow::Result;
use hunt_content::SigilComponent;
use hunt_engine::{Actor, ActorId, Vec2, World};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListDirection, ListItem, Paragraph},
};

use crate::app::GameStatus;
use crate::config::WorldSize;
use crate::message::{MessageLevel, MessageLog};
use crate::terminal::Tui;

/// Everything one frame needs from the session.
pub struct UiFrame<'a> {
    pub world: &'a World,
    pub player: ActorId,
    pub grid: WorldSize,
    pub hp: i32,
    pub score: i32,
    pub status: GameStatus,
    pub messages: &'a MessageLog,
}

pub fn render(terminal: &mut Tui, view: &UiFrame) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, view))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, view: &UiFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.grid.height + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_map(frame, chunks[0], view);
    render_status(frame, chunks[1], view);
    render_messages(frame, chunks[2], view.messages);
}

fn render_map(frame: &mut Frame, area: Rect, view: &UiFrame) {
    let width = usize::from(view.grid.width);
    let height = usize::from(view.grid.height);
    let mut cells = vec![vec!['#'; width]; height];

    for actor in view.world.actors() {
        if actor.id() != view.player {
            stamp(&mut cells, actor);
        }
    }
    // The player is stamped last so its sigil always wins the cell.
    if let Some(player) = view.world.actor(view.player) {
        stamp(&mut cells, player);
    }

    let rows: Vec<Line> = cells
        .into_iter()
        .map(|row| Line::from(row.into_iter().collect::<String>()))
        .collect();

    frame.render_widget(
        Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title("World")),
        area,
    );
}

fn stamp(cells: &mut [Vec<char>], actor: &Actor) {
    let Some(pawn) = actor.state().as_pawn() else {
        return;
    };
    let Some(sigils) = actor.component::<SigilComponent>() else {
        return;
    };

    let frame = pawn.frame();
    let height = cells.len();
    let width = cells[0].len();
    let (row, col) = project(frame.position, width, height);
    cells[row][col] = sigils.glyph(frame.facing);
}

/// Grid projection inherited from the console renderer: both axes are
/// mirrored and row zero is the top of the screen.
fn project(position: Vec2, width: usize, height: usize) -> (usize, usize) {
    let (x, y) = position.grid();
    let row = (height as i32 - y).clamp(0, height as i32 - 1) as usize;
    let col = (width as i32 - x).clamp(0, width as i32 - 1) as usize;
    (row, col)
}

fn render_status(frame: &mut Frame, area: Rect, view: &UiFrame) {
    let banner = match view.status {
        GameStatus::Ongoing => Span::styled(
            "WASD to move, 1-6 to tweak stats, Q to quit",
            Style::default().fg(Color::DarkGray),
        ),
        GameStatus::Won => Span::styled(
            "You win!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        GameStatus::Lost => Span::styled(
            "You lost!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let line = Line::from(vec![
        Span::raw(format!("hp: {}   score: {}   ", view.hp, view.score)),
        banner,
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status")),
        area,
    );
}

fn render_messages(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| {
            let style = match entry.level {
                MessageLevel::Info => Style::default(),
                MessageLevel::Alert => Style::default().fg(Color::Red),
            };
            ListItem::new(Span::styled(entry.text.clone(), style))
        })
        .collect();

    frame.render_widget(
        List::new(items)
            .direction(ListDirection::BottomToTop)
            .block(Block::default().borders(Borders::ALL).title("Messages")),
        area,
    );
}
