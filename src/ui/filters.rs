use crate::session::PracticeSession;
use crate::ui::layout::calculate_filters_chunks;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Category checkboxes ("All topics" first), the difficulty filter line,
/// and the topic hint.
pub fn draw_filters(
    f: &mut Frame,
    area: Rect,
    session: &PracticeSession,
    focused: bool,
    theme: &Theme,
) {
    let layout = calculate_filters_chunks(area);

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let mut items: Vec<ListItem> = Vec::with_capacity(session.categories.len() + 1);
    items.push(checkbox_row(
        "All topics",
        session.all_selected(),
        session.filter_cursor == 0 && focused,
        theme,
    ));
    for (i, category) in session.categories.iter().enumerate() {
        let checked = session
            .selected_categories
            .iter()
            .any(|title| title == &category.title);
        items.push(checkbox_row(
            &category.title,
            checked,
            session.filter_cursor == i + 1 && focused,
            theme,
        ));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Category"),
    );
    f.render_widget(list, layout.categories_area);

    let difficulty_label = match session.selected_difficulty {
        None => "All Difficulties",
        Some(d) => d.label(),
    };
    let difficulty = Paragraph::new(Line::from(vec![
        Span::styled(
            "Difficulty: ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(difficulty_label, Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(difficulty, layout.difficulty_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        "(i) Make sure to select a topic",
        Style::default()
            .fg(theme.info)
            .add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(hint, layout.hint_area);
}

fn checkbox_row(label: &str, checked: bool, under_cursor: bool, theme: &Theme) -> ListItem<'static> {
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if under_cursor {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    ListItem::new(format!("{} {}", marker, label)).style(style)
}
