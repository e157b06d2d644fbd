use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::ReadResult;
use derive_new::new;

/// Depth-first preorder walk over a commit's ancestry: the commit itself,
/// then each parent's subtree in the order the parents appear.
///
/// There is no cache and no visited set, so an ancestor shared by both
/// sides of a merge is decoded and yielded once per path that reaches it.
/// Commit graphs written by git are acyclic, which bounds the walk. The
/// worklist is an explicit stack, so traversal depth is bounded by memory
/// rather than call-stack frames.
#[derive(new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start: ObjectId,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = ReadResult<Commit>;
    type IntoIter = RevListIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIter {
            repository: self.repository,
            pending: vec![self.start],
        }
    }
}

pub struct RevListIter<'r> {
    repository: &'r Repository,
    pending: Vec<ObjectId>,
}

impl Iterator for RevListIter<'_> {
    type Item = ReadResult<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.pending.pop()?;

        match self.repository.database().parse_commit(&oid) {
            Ok(commit) => {
                // push in reverse so the first parent is walked first
                for parent in commit.parents().iter().rev() {
                    self.pending.push(parent.clone());
                }
                Some(Ok(commit))
            }
            Err(err) => {
                // errors are terminal for the walk
                self.pending.clear();
                Some(Err(err))
            }
        }
    }
}
