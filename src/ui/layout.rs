use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub header_area: Rect,
    pub filters_area: Rect,
    pub question_area: Rect,
    pub help_area: Rect,
}

pub struct FiltersLayout {
    pub categories_area: Rect,
    pub difficulty_area: Rect,
    pub hint_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    ScreenLayout {
        header_area: chunks[0],
        filters_area: body[0],
        question_area: body[1],
        help_area: chunks[2],
    }
}

pub fn calculate_filters_chunks(area: Rect) -> FiltersLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    FiltersLayout {
        categories_area: chunks[0],
        difficulty_area: chunks[1],
        hint_area: chunks[2],
    }
}
