use crate::list::cursor::CursorMut;
use crate::List;
use std::fmt;

/// The lazy form of [`List::remove_if`], produced by [`List::extract_if`].
///
/// A single front-to-back pass over the list: each element the filter
/// accepts is unlinked and yielded, the others are left in place, in their
/// order. The filter may also modify the elements it keeps.
///
/// Dropping the iterator runs the pass to the end, so the list never keeps
/// an element the filter would have accepted. [`List::remove_if`] and
/// [`List::retain`] are this pass with the removed elements dropped.
pub struct ExtractIf<'a, T: 'a, F: 'a>
where
    F: FnMut(&mut T) -> bool,
{
    cursor: CursorMut<'a, T>,
    filter: F,
    removed: usize,
}

impl<'a, T, F> ExtractIf<'a, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(list: &'a mut List<T>, filter: F) -> Self {
        let cursor = list.cursor_start_mut();
        Self {
            cursor,
            filter,
            removed: 0,
        }
    }

    /// Drop every remaining element the filter accepts, and return how many
    /// elements the whole pass removed.
    pub(crate) fn finish(mut self) -> usize {
        self.by_ref().for_each(drop);
        self.removed
    }
}

impl<T, F> Iterator for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if (self.filter)(self.cursor.current_mut()?) {
                self.removed += 1;
                return self.cursor.remove();
            }
            self.cursor.move_next();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Nodes behind the cursor have been kept for good.
        let unvisited = self.cursor.view().len() - self.cursor.index();
        (0, Some(unvisited))
    }
}

impl<T, F> Drop for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractIf")
            .field("list", self.cursor.view())
            .field("removed", &self.removed)
            .finish()
    }
}
