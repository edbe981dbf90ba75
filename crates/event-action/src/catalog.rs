//! The built-in event action table.
//!
//! Protocol and display code depend on these exact `(id, name)` pairs, so
//! entries must never be renumbered or renamed. Ids are unique, but not
//! contiguous and not all positive.
//!
//! Actions are grouped by the operation that emits them: names starting with
//! `update_` are only produced by update-like operations (update, checkout,
//! switch, export), `commit_` by commit, and so on.

use crate::action::EventAction;

/// Transfer progress on a long-running operation.
pub const PROGRESS: EventAction = EventAction::from_static(-1, "progress");

/// An item was scheduled for addition.
pub const ADD: EventAction = EventAction::from_static(0, "add");

/// An item was copied with history.
pub const COPY: EventAction = EventAction::from_static(1, "copy");

/// An item was scheduled for deletion.
pub const DELETE: EventAction = EventAction::from_static(2, "delete");

/// A missing item was restored from its pristine copy.
pub const RESTORE: EventAction = EventAction::from_static(3, "restore");

/// Local changes to an item were reverted.
pub const REVERT: EventAction = EventAction::from_static(4, "revert");

/// Reverting an item failed.
pub const FAILED_REVERT: EventAction = EventAction::from_static(5, "failed_revert");

/// A conflict on an item was marked resolved.
pub const RESOLVED: EventAction = EventAction::from_static(6, "resolved");

/// An item was skipped.
pub const SKIP: EventAction = EventAction::from_static(7, "skip");

/// Update removed an item from the working copy.
pub const UPDATE_DELETE: EventAction = EventAction::from_static(8, "update_delete");

/// Update added an item to the working copy.
pub const UPDATE_ADD: EventAction = EventAction::from_static(9, "update_add");

/// Update changed an item's contents or properties.
pub const UPDATE_UPDATE: EventAction = EventAction::from_static(10, "update_update");

/// Update left an item unchanged.
pub const UPDATE_NONE: EventAction = EventAction::from_static(-10, "update_none");

/// An update, checkout, switch or export finished.
pub const UPDATE_COMPLETED: EventAction = EventAction::from_static(11, "update_completed");

/// Update is about to process an externals definition.
pub const UPDATE_EXTERNAL: EventAction = EventAction::from_static(12, "update_external");

/// A status run finished.
pub const STATUS_COMPLETED: EventAction = EventAction::from_static(13, "status_completed");

/// Status is about to descend into an externals definition.
pub const STATUS_EXTERNAL: EventAction = EventAction::from_static(14, "status_external");

/// A modified item is being committed.
pub const COMMIT_MODIFIED: EventAction = EventAction::from_static(15, "commit_modified");

/// An added item is being committed.
pub const COMMIT_ADDED: EventAction = EventAction::from_static(16, "commit_added");

/// A deleted item is being committed.
pub const COMMIT_DELETED: EventAction = EventAction::from_static(17, "commit_deleted");

/// A replaced item is being committed.
pub const COMMIT_REPLACED: EventAction = EventAction::from_static(18, "commit_replaced");

/// File contents were transmitted during commit.
pub const COMMIT_DELTA_SENT: EventAction = EventAction::from_static(19, "commit_delta_sent");

/// A commit finished.
pub const COMMIT_COMPLETED: EventAction = EventAction::from_static(-3, "commit_completed");

/// Blame is processing a revision of a file.
pub const ANNOTATE: EventAction = EventAction::from_static(20, "annotate");

/// An item was locked.
pub const LOCKED: EventAction = EventAction::from_static(21, "locked");

/// An item was unlocked.
pub const UNLOCKED: EventAction = EventAction::from_static(22, "unlocked");

/// Locking an item failed.
pub const LOCK_FAILED: EventAction = EventAction::from_static(23, "lock_failed");

/// Unlocking an item failed.
pub const UNLOCK_FAILED: EventAction = EventAction::from_static(24, "unlock_failed");

/// A working copy upgrade started.
pub const WC_UPGRADE: EventAction = EventAction::from_static(-2, "wc_upgrade");

/// A working copy path was upgraded.
pub const UPGRADED_PATH: EventAction = EventAction::from_static(50, "upgraded_path");

/// The server redirected the request to another URL.
pub const URL_REDIRECT: EventAction = EventAction::from_static(59, "url_redirect");

/// Update found an unversioned item already in place.
pub const UPDATE_EXISTS: EventAction = EventAction::from_static(25, "update_exists");

/// An item was added to a changelist.
pub const CHANGELIST_SET: EventAction = EventAction::from_static(26, "changelist_set");

/// An item was removed from its changelist.
pub const CHANGELIST_CLEAR: EventAction = EventAction::from_static(27, "changelist_clear");

/// An item moved from one changelist to another.
pub const CHANGELIST_MOVED: EventAction = EventAction::from_static(28, "changelist_moved");

/// A merge of a revision range started.
pub const MERGE_BEGIN: EventAction = EventAction::from_static(29, "merge_begin");

/// A merge from a foreign repository started.
pub const FOREIGN_MERGE_BEGIN: EventAction = EventAction::from_static(30, "foreign_merge_begin");

/// Update replaced an item.
pub const UPDATE_REPLACE: EventAction = EventAction::from_static(31, "update_replace");

/// A property was added.
pub const PROPERTY_ADDED: EventAction = EventAction::from_static(32, "property_added");

/// A property value changed.
pub const PROPERTY_MODIFIED: EventAction = EventAction::from_static(33, "property_modified");

/// A property was deleted.
pub const PROPERTY_DELETED: EventAction = EventAction::from_static(34, "property_deleted");

/// Deleting a property that was not set.
pub const PROPERTY_DELETED_NONEXISTENT: EventAction =
    EventAction::from_static(35, "property_deleted_nonexistent");

/// A revision property was set.
pub const REVPROP_SET: EventAction = EventAction::from_static(36, "revprop_set");

/// A revision property was deleted.
pub const REVPROP_DELETED: EventAction = EventAction::from_static(37, "revprop_deleted");

/// A merge finished.
pub const MERGE_COMPLETED: EventAction = EventAction::from_static(38, "merge_completed");

/// A tree conflict was raised on an item.
pub const TREE_CONFLICT: EventAction = EventAction::from_static(39, "tree_conflict");

/// Processing an externals definition failed.
pub const FAILED_EXTERNAL: EventAction = EventAction::from_static(40, "failed_external");

/// A patch is being applied to a target.
pub const PATCH: EventAction = EventAction::from_static(53, "patch");

/// An update of a target started.
pub const UPDATE_STARTED: EventAction = EventAction::from_static(41, "update_started");

/// A patch hunk was rejected.
pub const PATCH_REJECTED_HUNK: EventAction = EventAction::from_static(55, "patch_rejected_hunk");

/// A patch hunk was applied.
pub const PATCH_APPLIED_HUNK: EventAction = EventAction::from_static(54, "patch_applied_hunk");

/// A patch hunk was already present in the target.
pub const PATCH_HUNK_ALREADY_APPLIED: EventAction =
    EventAction::from_static(56, "patch_hunk_already_applied");

/// Update skipped an item blocked by an obstruction.
pub const UPDATE_SKIP_OBSTRUCTION: EventAction =
    EventAction::from_static(42, "update_skip_obstruction");

/// Update skipped an item that exists only in the working copy.
pub const UPDATE_SKIP_WORKING_ONLY: EventAction =
    EventAction::from_static(43, "update_skip_working_only");

/// Update skipped an item it was not allowed to read.
pub const UPDATE_SKIP_ACCESS_DENIED: EventAction =
    EventAction::from_static(44, "update_skip_access_denied");

/// Update removed an external that is no longer defined.
pub const UPDATE_EXTERNAL_REMOVED: EventAction =
    EventAction::from_static(45, "update_external_removed");

/// Update added an item below a local modification.
pub const UPDATE_SHADOWED_ADD: EventAction = EventAction::from_static(46, "update_shadowed_add");

/// Update changed an item below a local modification.
pub const UPDATE_SHADOWED_UPDATE: EventAction =
    EventAction::from_static(47, "update_shadowed_update");

/// Update deleted an item below a local modification.
pub const UPDATE_SHADOWED_DELETE: EventAction =
    EventAction::from_static(48, "update_shadowed_delete");

/// An item was skipped because it is in conflict.
pub const SKIP_CONFLICTED: EventAction = EventAction::from_static(68, "skip_conflicted");

/// The requested path does not exist.
pub const PATH_NONEXISTENT: EventAction = EventAction::from_static(60, "path_nonexistent");

/// Mergeinfo is being recorded.
pub const MERGE_RECORD_INFO: EventAction = EventAction::from_static(49, "merge_record_info");

/// Recording mergeinfo for a range started.
pub const MERGE_RECORD_INFO_BEGIN: EventAction =
    EventAction::from_static(51, "merge_record_info_begin");

/// Mergeinfo is being elided.
pub const MERGE_ELIDE_INFO: EventAction = EventAction::from_static(52, "merge_elide_info");

/// The operation failed because an item is out of date.
pub const FAILED_OUT_OF_DATE: EventAction = EventAction::from_static(64, "failed_out_of_date");

/// The operation failed because a parent is not versioned.
pub const FAILED_NO_PARENT: EventAction = EventAction::from_static(65, "failed_no_parent");

/// The operation failed because an item is locked.
pub const FAILED_LOCKED: EventAction = EventAction::from_static(66, "failed_locked");

/// The server refused the operation.
pub const FAILED_FORBIDDEN_BY_SERVER: EventAction =
    EventAction::from_static(67, "failed_forbidden_by_server");

/// Update found that a lock was broken.
pub const UPDATE_BROKEN_LOCK: EventAction = EventAction::from_static(69, "update_broken_lock");

/// The conflict resolver started.
pub const RESOLVER_STARTING: EventAction = EventAction::from_static(71, "resolver_starting");

/// The conflict resolver finished.
pub const RESOLVER_DONE: EventAction = EventAction::from_static(72, "resolver_done");

/// The operation failed because of an obstruction.
pub const FAILED_OBSTRUCTION: EventAction = EventAction::from_static(70, "failed_obstruction");

/// The operation failed because an item is in conflict.
pub const FAILED_CONFLICT: EventAction = EventAction::from_static(62, "failed_conflict");

/// The operation failed because an item is missing.
pub const FAILED_MISSING: EventAction = EventAction::from_static(63, "failed_missing");

/// A copy from a foreign repository started.
pub const FOREIGN_COPY_BEGIN: EventAction = EventAction::from_static(74, "foreign_copy_begin");

/// A move was broken into a copy and a delete.
pub const MOVE_BROKEN: EventAction = EventAction::from_static(75, "move_broken");

/// Cleanup is processing an external.
pub const CLEANUP_EXTERNAL: EventAction = EventAction::from_static(76, "cleanup_external");

/// The operation needs a target that was not given.
pub const FAILED_REQUIRES_TARGET: EventAction =
    EventAction::from_static(77, "failed_requires_target");

/// Info is descending into an external.
pub const INFO_EXTERNAL: EventAction = EventAction::from_static(78, "info_external");

/// The server is finalizing a commit.
pub const COMMIT_FINALIZING: EventAction = EventAction::from_static(79, "commit_finalizing");

/// Every built-in action, in declaration order.
pub const CATALOG: &[EventAction] = &[
    PROGRESS,
    ADD,
    COPY,
    DELETE,
    RESTORE,
    REVERT,
    FAILED_REVERT,
    RESOLVED,
    SKIP,
    UPDATE_DELETE,
    UPDATE_ADD,
    UPDATE_UPDATE,
    UPDATE_NONE,
    UPDATE_COMPLETED,
    UPDATE_EXTERNAL,
    STATUS_COMPLETED,
    STATUS_EXTERNAL,
    COMMIT_MODIFIED,
    COMMIT_ADDED,
    COMMIT_DELETED,
    COMMIT_REPLACED,
    COMMIT_DELTA_SENT,
    COMMIT_COMPLETED,
    ANNOTATE,
    LOCKED,
    UNLOCKED,
    LOCK_FAILED,
    UNLOCK_FAILED,
    WC_UPGRADE,
    UPGRADED_PATH,
    URL_REDIRECT,
    UPDATE_EXISTS,
    CHANGELIST_SET,
    CHANGELIST_CLEAR,
    CHANGELIST_MOVED,
    MERGE_BEGIN,
    FOREIGN_MERGE_BEGIN,
    UPDATE_REPLACE,
    PROPERTY_ADDED,
    PROPERTY_MODIFIED,
    PROPERTY_DELETED,
    PROPERTY_DELETED_NONEXISTENT,
    REVPROP_SET,
    REVPROP_DELETED,
    MERGE_COMPLETED,
    TREE_CONFLICT,
    FAILED_EXTERNAL,
    PATCH,
    UPDATE_STARTED,
    PATCH_REJECTED_HUNK,
    PATCH_APPLIED_HUNK,
    PATCH_HUNK_ALREADY_APPLIED,
    UPDATE_SKIP_OBSTRUCTION,
    UPDATE_SKIP_WORKING_ONLY,
    UPDATE_SKIP_ACCESS_DENIED,
    UPDATE_EXTERNAL_REMOVED,
    UPDATE_SHADOWED_ADD,
    UPDATE_SHADOWED_UPDATE,
    UPDATE_SHADOWED_DELETE,
    SKIP_CONFLICTED,
    PATH_NONEXISTENT,
    MERGE_RECORD_INFO,
    MERGE_RECORD_INFO_BEGIN,
    MERGE_ELIDE_INFO,
    FAILED_OUT_OF_DATE,
    FAILED_NO_PARENT,
    FAILED_LOCKED,
    FAILED_FORBIDDEN_BY_SERVER,
    UPDATE_BROKEN_LOCK,
    RESOLVER_STARTING,
    RESOLVER_DONE,
    FAILED_OBSTRUCTION,
    FAILED_CONFLICT,
    FAILED_MISSING,
    FOREIGN_COPY_BEGIN,
    MOVE_BROKEN,
    CLEANUP_EXTERNAL,
    FAILED_REQUIRES_TARGET,
    INFO_EXTERNAL,
    COMMIT_FINALIZING,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<i32> = CATALOG.iter().map(EventAction::id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 80);
    }

    #[test]
    fn test_catalog_names_unique_and_present() {
        let names: HashSet<&str> = CATALOG.iter().filter_map(EventAction::raw_name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_id_range() {
        let min = CATALOG.iter().map(EventAction::id).min();
        let max = CATALOG.iter().map(EventAction::id).max();
        assert_eq!(min, Some(-10));
        assert_eq!(max, Some(79));
    }

    #[test]
    fn test_reserved_negative_ids() {
        assert_eq!(PROGRESS.id(), -1);
        assert_eq!(WC_UPGRADE.id(), -2);
        assert_eq!(COMMIT_COMPLETED.id(), -3);
        assert_eq!(UPDATE_NONE.id(), -10);
    }
}
