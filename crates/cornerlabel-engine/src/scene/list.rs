use super::DrawCmd;

/// Recorded draw stream for a frame, in paint order (back-to-front).
///
/// The host clears the list once per frame; nothing recorded in a previous
/// frame survives [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Appends a command on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::path::Path;

    fn dot() -> Path {
        Path::builder().move_to(0.0, 0.0).line_to(1.0, 0.0).line_to(0.0, 1.0).close().build()
    }

    #[test]
    fn later_pushes_paint_on_top() {
        let mut list = DrawList::new();
        list.push_fill_path(dot(), Color::red());
        list.push_fill_path(dot(), Color::white());

        let colors: Vec<Color> = list
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::FillPath(f) => f.color,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![Color::red(), Color::white()]);
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut list = DrawList::new();
        list.push_fill_path(dot(), Color::red());
        list.clear();
        assert!(list.is_empty());
        list.push_fill_path(dot(), Color::white());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn fill_path_keeps_points() {
        let mut list = DrawList::new();
        list.push_fill_path(dot(), Color::red());
        match &list.items()[0] {
            DrawCmd::FillPath(cmd) => assert_eq!(cmd.path.points()[1], Vec2::new(1.0, 0.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
