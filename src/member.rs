use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide member ID sequence.
///
/// Incremented once per constructed member and never reused, so IDs stay
/// unique even after members are removed. Atomic so the sequence keeps its
/// guarantees if construction ever moves off a single thread.
static NEXT_MEMBER_SEQ: AtomicU32 = AtomicU32::new(0);

/// A registered member and the ISBNs currently issued to them.
///
/// The member ID is generated at construction (`"M"` plus a sequence number)
/// and never changes. The issued list keeps insertion order, which is issue
/// order.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    email: String,
    member_id: String,
    issued_isbns: Vec<String>,
}

impl Member {
    /// Register a new member with a freshly generated ID.
    ///
    /// The email is stored as given; no syntax validation is performed.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let seq = NEXT_MEMBER_SEQ.fetch_add(1, Ordering::Relaxed) + 1;
        Self {
            name: name.into(),
            email: email.into(),
            member_id: format!("M{seq}"),
            issued_isbns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// ISBNs currently held, in issue order.
    pub fn issued_isbns(&self) -> &[String] {
        &self.issued_isbns
    }

    /// Number of books currently issued to this member.
    pub fn issued_count(&self) -> usize {
        self.issued_isbns.len()
    }

    /// Record an issued ISBN, unconditionally.
    ///
    /// The caller is responsible for checking availability and the issue
    /// limit first; the registry is the only place that does.
    pub fn issue_book(&mut self, isbn: impl Into<String>) {
        self.issued_isbns.push(isbn.into());
    }

    /// Drop the first occurrence of `isbn` from the issued list.
    ///
    /// Silently does nothing if the member does not hold that ISBN.
    pub fn return_book(&mut self, isbn: &str) {
        if let Some(pos) = self.issued_isbns.iter().position(|held| held == isbn) {
            self.issued_isbns.remove(pos);
        }
    }

    /// Whether this member currently holds `isbn`. Linear scan.
    pub fn has_book(&self, isbn: &str) -> bool {
        self.issued_isbns.iter().any(|held| held == isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::Member;

    fn seq_of(member: &Member) -> u32 {
        member.member_id()[1..].parse().unwrap()
    }

    #[test]
    fn ids_are_prefixed_and_strictly_increasing() {
        let first = Member::new("John Doe", "john@example.com");
        let second = Member::new("Jane Smith", "jane@example.com");
        assert!(first.member_id().starts_with('M'));
        assert!(second.member_id().starts_with('M'));
        assert!(seq_of(&second) > seq_of(&first));
    }

    #[test]
    fn issue_and_return_keep_count_in_step() {
        let mut member = Member::new("John Doe", "john@example.com");
        assert_eq!(member.issued_count(), 0);

        member.issue_book("111");
        member.issue_book("222");
        assert_eq!(member.issued_count(), 2);
        assert!(member.has_book("111"));

        member.return_book("111");
        assert_eq!(member.issued_count(), 1);
        assert!(!member.has_book("111"));
        assert!(member.has_book("222"));
    }

    #[test]
    fn returning_an_unheld_isbn_is_a_silent_noop() {
        let mut member = Member::new("John Doe", "john@example.com");
        member.issue_book("111");
        member.return_book("999");
        assert_eq!(member.issued_count(), 1);
    }

    #[test]
    fn issued_list_preserves_issue_order() {
        let mut member = Member::new("John Doe", "john@example.com");
        member.issue_book("333");
        member.issue_book("111");
        member.issue_book("222");
        assert_eq!(member.issued_isbns(), ["333", "111", "222"]);
    }
}
