use pathway_engine::Session;
use ratatui::widgets::ListState;

/// One rendered line of the roadmap view: either a milestone header or a
/// selectable topic. Indices point into the session's current roadmap and
/// are rebuilt on every generate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row {
    /// Index into `roadmap.categories`
    Milestone(usize),
    /// (category index, topic index)
    Topic(usize, usize),
}

/// Terminal app state: the engine session plus UI-only concerns (flattened
/// row list, list selection, editor cursor).
pub struct App {
    pub session: Session,
    rows: Vec<Row>,
    pub list_state: ListState,
    /// Byte offset of the editor cursor in the markdown buffer
    cursor: usize,
}

impl App {
    pub fn new(session: Session) -> Self {
        let cursor = session.markdown().len();
        let mut app = Self {
            session,
            rows: Vec::new(),
            list_state: ListState::default(),
            cursor,
        };
        app.rebuild_rows();
        app
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Parse the buffer into a fresh roadmap and reset the selection.
    pub fn generate(&mut self) {
        self.session.generate();
        self.rebuild_rows();
    }

    /// Flatten the current roadmap into display rows and select the first
    /// topic if there is one.
    fn rebuild_rows(&mut self) {
        self.rows.clear();
        for (c, category) in self.session.roadmap().categories.iter().enumerate() {
            self.rows.push(Row::Milestone(c));
            for t in 0..category.topics.len() {
                self.rows.push(Row::Topic(c, t));
            }
        }
        let first_topic = self.topic_positions().first().copied();
        self.list_state.select(first_topic);
    }

    fn topic_positions(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, Row::Topic(..)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the selection to the next topic row, wrapping and skipping
    /// milestone headers.
    pub fn next_topic(&mut self) {
        let positions = self.topic_positions();
        if positions.is_empty() {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(current) => positions
                .iter()
                .copied()
                .find(|&p| p > current)
                .unwrap_or(positions[0]),
            None => positions[0],
        };
        self.list_state.select(Some(next));
    }

    /// Move the selection to the previous topic row, wrapping and skipping
    /// milestone headers.
    pub fn previous_topic(&mut self) {
        let positions = self.topic_positions();
        if positions.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = positions[positions.len() - 1];
        let previous = match self.list_state.selected() {
            Some(current) => positions
                .iter()
                .rev()
                .copied()
                .find(|&p| p < current)
                .unwrap_or(last),
            None => last,
        };
        self.list_state.select(Some(previous));
    }

    /// Toggle completion of the selected topic.
    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.list_state.selected()
            && let Some(Row::Topic(c, t)) = self.rows.get(index).copied()
        {
            let id = self.session.roadmap().categories[c].topics[t].id;
            self.session.toggle_topic(id);
        }
    }

    // Editor operations. The session owns the text; every edit replaces it
    // wholesale, which keeps set_markdown the only write path.

    fn edit_markdown(&mut self, edit: impl FnOnce(&mut String)) {
        let mut text = self.session.markdown().to_string();
        edit(&mut text);
        self.session.set_markdown(text);
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.edit_markdown(|text| text.insert(cursor, c));
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let previous = previous_boundary(self.session.markdown(), self.cursor);
        let cursor = self.cursor;
        self.edit_markdown(|text| {
            text.replace_range(previous..cursor, "");
        });
        self.cursor = previous;
    }

    pub fn move_left(&mut self) {
        self.cursor = previous_boundary(self.session.markdown(), self.cursor);
    }

    pub fn move_right(&mut self) {
        let text = self.session.markdown();
        if let Some(c) = text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = line_start(self.session.markdown(), self.cursor);
    }

    pub fn move_end(&mut self) {
        let text = self.session.markdown();
        self.cursor += text[self.cursor..].find('\n').unwrap_or(text.len() - self.cursor);
    }

    pub fn move_up(&mut self) {
        let text = self.session.markdown();
        let start = line_start(text, self.cursor);
        if start == 0 {
            return;
        }
        let column = text[start..self.cursor].chars().count();
        let previous_start = line_start(text, start - 1);
        let previous_line = &text[previous_start..start - 1];
        self.cursor = previous_start + column_offset(previous_line, column);
    }

    pub fn move_down(&mut self) {
        let text = self.session.markdown();
        let start = line_start(text, self.cursor);
        let column = text[start..self.cursor].chars().count();
        let Some(end) = text[self.cursor..].find('\n') else {
            return;
        };
        let next_start = self.cursor + end + 1;
        let next_end = next_start + text[next_start..].find('\n').unwrap_or(text.len() - next_start);
        let next_line = &text[next_start..next_end];
        self.cursor = next_start + column_offset(next_line, column);
    }

    /// (line, column) of the cursor, in lines and characters, for rendering.
    pub fn cursor_position(&self) -> (usize, usize) {
        let text = self.session.markdown();
        let line = text[..self.cursor].matches('\n').count();
        let start = line_start(text, self.cursor);
        let column = text[start..self.cursor].chars().count();
        (line, column)
    }
}

/// Byte offset of the start of the line containing `at`.
fn line_start(text: &str, at: usize) -> usize {
    text[..at].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the character at `column` within `line`, clamped to the
/// end of the line.
fn column_offset(line: &str, column: usize) -> usize {
    line.chars().take(column).map(char::len_utf8).sum()
}

/// Byte offset of the previous character boundary before `at`.
fn previous_boundary(text: &str, at: usize) -> usize {
    text[..at]
        .chars()
        .next_back()
        .map(|c| at - c.len_utf8())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn viewing_app(markdown: &str) -> App {
        let mut app = App::new(Session::with_markdown(markdown));
        app.generate();
        app
    }

    #[test]
    fn test_rows_interleave_milestones_and_topics() {
        let app = viewing_app("# A\n- one\n- two\n# B\n- three");

        assert_eq!(
            app.rows(),
            &[
                Row::Milestone(0),
                Row::Topic(0, 0),
                Row::Topic(0, 1),
                Row::Milestone(1),
                Row::Topic(1, 0),
            ]
        );
        // First topic selected, not the header above it
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_skips_milestone_headers_and_wraps() {
        let mut app = viewing_app("# A\n- one\n# B\n- two");

        assert_eq!(app.list_state.selected(), Some(1));
        app.next_topic();
        assert_eq!(app.list_state.selected(), Some(3));
        app.next_topic();
        assert_eq!(app.list_state.selected(), Some(1));
        app.previous_topic();
        assert_eq!(app.list_state.selected(), Some(3));
    }

    #[test]
    fn test_navigation_with_empty_roadmap_selects_nothing() {
        let mut app = viewing_app("no markers here");

        assert_eq!(app.list_state.selected(), None);
        app.next_topic();
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_toggle_selected_flips_the_right_topic() {
        let mut app = viewing_app("# A\n- one\n- two");

        app.next_topic();
        app.toggle_selected();

        let states: Vec<bool> = app.session.roadmap().topics().map(|t| t.completed).collect();
        assert_eq!(states, vec![false, true]);
        assert_eq!(app.session.progress(), 50);
    }

    #[test]
    fn test_insert_and_backspace_roundtrip() {
        let mut app = App::new(Session::new());

        for c in "- ok".chars() {
            app.insert_char(c);
        }
        assert_eq!(app.session.markdown(), "- ok");

        app.backspace();
        app.backspace();
        assert_eq!(app.session.markdown(), "- ");
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    fn test_cursor_moves_preserve_char_boundaries() {
        let mut app = App::new(Session::with_markdown("émoji ✅"));

        // Cursor starts at end of buffer; walk all the way left
        while app.cursor() > 0 {
            app.move_left();
        }
        assert_eq!(app.cursor(), 0);
        app.move_right();
        assert_eq!(app.cursor(), 'é'.len_utf8());
    }

    #[test]
    fn test_vertical_movement_clamps_to_shorter_lines() {
        let mut app = App::new(Session::with_markdown("short\na much longer line"));

        app.move_end();
        assert_eq!(app.cursor_position(), (1, 18));
        app.move_up();
        assert_eq!(app.cursor_position(), (0, 5));
        app.move_down();
        assert_eq!(app.cursor_position(), (1, 5));
    }

    #[test]
    fn test_generate_resets_selection_to_first_topic() {
        let mut app = viewing_app("# A\n- one\n- two");
        app.next_topic();
        assert_eq!(app.list_state.selected(), Some(2));

        app.generate();
        assert_eq!(app.list_state.selected(), Some(1));
    }
}
