//! Attachment queue — files the user has picked for the next message.
//!
//! The queue never rejects or deduplicates: two uploads named `resume.pdf`
//! are two attachments with distinct ids. Content is held as `Bytes` so a
//! snapshot taken for an in-flight send is a cheap, immutable copy.

use bytes::Bytes;
use serde::Serialize;
use uuid::Uuid;

/// Extensions offered by the upload picker. Anything else is still accepted.
const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".txt", ".doc", ".docx"];

/// Whether `name` ends in one of the picker's extensions, ignoring case.
pub fn is_supported_file_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// One user-selected file pending submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub content: Bytes,
}

impl Attachment {
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    pub fn summary(&self) -> AttachmentSummary {
        AttachmentSummary {
            id: self.id,
            name: self.name.clone(),
            size_bytes: self.size_bytes(),
        }
    }
}

/// What the UI gets to see of an attachment. Content stays server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentSummary {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: usize,
}

/// Ordered queue of pending attachments. Insertion order is display order.
#[derive(Debug, Default)]
pub struct AttachmentQueue {
    items: Vec<Attachment>,
}

impl AttachmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new attachment under a fresh id and returns that id.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Bytes>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Attachment {
            id,
            name: name.into(),
            content: content.into(),
        });
        id
    }

    /// Removes the attachment with `id`. Returns false (and does nothing) if absent.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn list(&self) -> &[Attachment] {
        &self.items
    }

    /// Owned copy of the current queue, insulated from later mutation.
    pub fn snapshot(&self) -> Vec<Attachment> {
        self.items.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_name_twice_yields_distinct_ids() {
        let mut queue = AttachmentQueue::new();
        let a = queue.add("resume.pdf", Bytes::from_static(b"one"));
        let b = queue.add("resume.pdf", Bytes::from_static(b"two"));

        assert_ne!(a, b);
        assert_eq!(queue.list().len(), 2);
        assert!(queue.list().iter().all(|att| att.name == "resume.pdf"));
    }

    #[test]
    fn test_remove_one_of_two_same_named_keeps_other() {
        let mut queue = AttachmentQueue::new();
        let a = queue.add("resume.pdf", Bytes::from_static(b"one"));
        let b = queue.add("resume.pdf", Bytes::from_static(b"two"));

        assert!(queue.remove(a));
        assert_eq!(queue.list().len(), 1);
        assert_eq!(queue.list()[0].id, b);
        assert_eq!(queue.list()[0].content, Bytes::from_static(b"two"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut queue = AttachmentQueue::new();
        queue.add("jd.txt", Bytes::from_static(b"jd"));

        assert!(!queue.remove(Uuid::new_v4()));
        assert_eq!(queue.list().len(), 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut queue = AttachmentQueue::new();
        queue.add("a.pdf", Bytes::new());
        queue.add("b.docx", Bytes::new());
        queue.add("c.txt", Bytes::new());

        let names: Vec<&str> = queue.list().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.docx", "c.txt"]);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let mut queue = AttachmentQueue::new();
        let id = queue.add("resume.pdf", Bytes::from_static(b"cv"));
        let snapshot = queue.snapshot();

        queue.remove(id);
        queue.add("other.pdf", Bytes::new());
        queue.clear();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);
        assert_eq!(snapshot[0].name, "resume.pdf");
    }

    #[test]
    fn test_clear_empties_queue() {
        let mut queue = AttachmentQueue::new();
        queue.add("a.pdf", Bytes::new());
        queue.add("b.pdf", Bytes::new());
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_supported_extension_is_case_insensitive() {
        assert!(is_supported_file_name("Resume.PDF"));
        assert!(is_supported_file_name("cover.docx"));
        assert!(!is_supported_file_name("notes.md"));
        assert!(!is_supported_file_name("pdf"));
    }

    #[test]
    fn test_summary_reports_size_without_content() {
        let mut queue = AttachmentQueue::new();
        let id = queue.add("jd.txt", Bytes::from_static(b"hello"));
        let summary = queue.list()[0].summary();

        assert_eq!(summary.id, id);
        assert_eq!(summary.size_bytes, 5);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("content").is_none());
    }
}
