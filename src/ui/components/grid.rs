//! Scrollable grid component with a highlighted cell cursor.

use color_eyre::eyre::Result;
use itertools::Itertools;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::Text,
    widgets::{
        Cell, HighlightSpacing, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Table, TableState,
    },
};
use std::cell::RefCell;
use unicode_width::UnicodeWidthStr;

use crate::ui::{
    store::state::Cursor,
    views::traits::{CustomWidgetContext, CustomWidgetRef},
};

/// Widest a column may grow before cell contents are truncated.
const MAX_COLUMN_WIDTH: u16 = 32;
/// Used for overflow when a cell exceeds its column width
const ELLIPSIS: &str = "…";

/// Scrollable table grid. The cell cursor is re-applied from the store's
/// state on every draw, so full repaints never move the highlight.
pub struct Grid {
    headers: Vec<String>,
    items: Vec<Vec<String>>,
    column_sizes: Vec<u16>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Grid {
    /// Creates an empty grid; [`Grid::update`] fills it each frame.
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            items: Vec::new(),
            column_sizes: Vec::new(),
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(ScrollbarState::new(0)),
        }
    }

    /// Replaces the grid contents. Column widths are recomputed from the
    /// new data and the scroll range follows the new row count.
    pub fn update(&mut self, headers: Vec<String>, items: Vec<Vec<String>>) {
        self.column_sizes = column_sizes(&headers, &items);
        self.scroll_state = RefCell::new(ScrollbarState::new(
            items.len().saturating_sub(1),
        ));
        self.headers = headers;
        self.items = items;
    }

    // The store's cursor is authoritative; rendering only projects it.
    fn apply_cursor(&self, cursor: Cursor) {
        let mut table_state = self.table_state.borrow_mut();

        if self.items.is_empty() {
            table_state.select(None);
            table_state.select_column(None);
        } else {
            table_state.select(Some(cursor.row));
            table_state.select_column(Some(cursor.col));
        }

        let new_scroll_state =
            self.scroll_state.borrow().position(cursor.row);
        *self.scroll_state.borrow_mut() = new_scroll_state;
    }
}

impl CustomWidgetRef for Grid {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        self.apply_cursor(ctx.state.cursor);

        // main grid view + right aligned scrollbar
        let grid_rects = Layout::horizontal([
            Constraint::Percentage(100),
            Constraint::Length(3),
        ])
        .split(area);

        let header_style = Style::default()
            .fg(ctx.state.colors.header_fg)
            .bg(ctx.state.colors.header_bg)
            .add_modifier(Modifier::BOLD);

        let header = self
            .headers
            .iter()
            .map(|h| Cell::from(format!(" {h}")))
            .collect::<Row>()
            .style(header_style)
            .height(1);

        let selected_cell_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(ctx.state.colors.selected_fg);

        // uses computed column sizes to calculate the remaining available
        // space for the last column, letting it fill the rest of the row
        // rather than truncating at its own width
        let mut free_for_last_col = area.width;
        self.column_sizes.iter().enumerate().for_each(|(i, s)| {
            if i != self.column_sizes.len() - 1 {
                free_for_last_col =
                    free_for_last_col.saturating_sub(s.to_owned());
            }
        });

        let rows = self
            .items
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, content)| {
                        let max_width = if i + 1 == self.column_sizes.len() {
                            // - scroll width - padding
                            free_for_last_col.saturating_sub(6)
                        } else {
                            self.column_sizes[i]
                        };
                        let formatted_content =
                            fit_to_width(content, max_width);
                        Cell::from(Text::from(format!(
                            " {formatted_content}"
                        )))
                    })
                    .collect::<Row>()
                    .style(
                        Style::new()
                            .fg(ctx.state.colors.text)
                            .bg(ctx.state.colors.buffer_bg),
                    )
                    .height(1)
            })
            .collect_vec();

        let constraints = self
            .column_sizes
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i + 1 == self.column_sizes.len() {
                    Constraint::Min(w.to_owned())
                } else {
                    Constraint::Max(w.to_owned())
                }
            })
            .collect_vec();

        let table = Table::new(rows, constraints)
            .header(header)
            .cell_highlight_style(selected_cell_style)
            .bg(ctx.state.colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always);

        table.render(
            grid_rects[0],
            buf,
            &mut self.table_state.borrow_mut(),
        );

        self.render_scrollbar(grid_rects[1], buf, ctx);

        Ok(())
    }
}

impl Grid {
    fn render_scrollbar(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let scroll_area = area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if scroll_area.width < 1 || scroll_area.height < 1 {
            return;
        }

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::new().fg(ctx.state.colors.scroll_bar_fg));

        scrollbar.render(
            scroll_area,
            buf,
            &mut self.scroll_state.borrow_mut(),
        )
    }
}

// Column width fits the widest cell, saturating at MAX_COLUMN_WIDTH.
fn column_sizes(headers: &[String], items: &[Vec<String>]) -> Vec<u16> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = items
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
                .max(header.width());
            (widest + 2).min(MAX_COLUMN_WIDTH as usize) as u16
        })
        .collect()
}

fn fit_to_width(content: &str, max_width: u16) -> String {
    let width = content.width() as u16;

    if width < max_width {
        return content.to_string();
    }

    let ellipsis_width = ELLIPSIS.width() as u16;
    let keep = max_width.saturating_sub(ellipsis_width * 2) as usize;

    let mut value: String = content.chars().take(keep).collect();
    value = value.trim_end().to_string();
    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./grid_tests.rs"]
mod tests;
