// src/domain/validated.rs
//
// Accumulating validation container. `Result` stays the short-circuiting
// type for sequential steps; `Validated` is for independent checks whose
// failures must all surface together.

/// Ordered list of errors that is non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyList<E> {
    head: E,
    tail: Vec<E>,
}

impl<E> NonEmptyList<E> {
    pub fn new(head: E) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// `None` when the vec is empty.
    pub fn from_vec(mut items: Vec<E>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let head = items.remove(0);
        Some(Self { head, tail: items })
    }

    pub fn push(&mut self, item: E) {
        self.tail.push(item);
    }

    /// Concatenates `other` after `self`, preserving both orders.
    pub fn append(&mut self, other: NonEmptyList<E>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; present so the type plays well with emptiness lints.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &E {
        &self.head
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn into_vec(self) -> Vec<E> {
        let mut items = Vec::with_capacity(1 + self.tail.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }

    pub fn map<F, U>(self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(E) -> U,
    {
        NonEmptyList {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }
}

impl<E> From<E> for NonEmptyList<E> {
    fn from(head: E) -> Self {
        Self::new(head)
    }
}

impl<E> IntoIterator for NonEmptyList<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

/// Success-or-failure container whose failure side accumulates.
///
/// Unlike `Result`, combining two `Validated` values with [`Validated::zip`]
/// evaluates both sides and concatenates every failure list instead of
/// stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T, E> {
    Valid(T),
    Invalid(NonEmptyList<E>),
}

impl<T, E> Validated<T, E> {
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    pub fn invalid(error: E) -> Self {
        Self::Invalid(NonEmptyList::new(error))
    }

    pub fn invalid_all(errors: NonEmptyList<E>) -> Self {
        Self::Invalid(errors)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Transforms the success value, passing failures through unchanged.
    pub fn map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transforms every accumulated error, passing successes through.
    pub fn map_errors<F, G>(self, f: G) -> Validated<T, F>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.map(f)),
        }
    }

    /// The applicative combinator. Both inputs are evaluated before this is
    /// called, so no failure is ever lost: if both are invalid the resulting
    /// list is `self`'s errors followed by `other`'s.
    pub fn zip<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
            (Self::Invalid(errors), Validated::Valid(_)) => Validated::Invalid(errors),
            (Self::Invalid(mut left), Validated::Invalid(right)) => {
                left.append(right);
                Validated::Invalid(left)
            }
        }
    }

    /// Bridge into the short-circuiting world once accumulation is done.
    pub fn into_result(self) -> Result<T, NonEmptyList<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_list_preserves_order() {
        let mut list = NonEmptyList::new("a");
        list.push("b");
        let mut other = NonEmptyList::new("c");
        other.push("d");
        list.append(other);
        assert_eq!(list.len(), 4);
        assert_eq!(list.into_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn from_vec_rejects_empty() {
        assert_eq!(NonEmptyList::<i32>::from_vec(vec![]), None);
        let list = NonEmptyList::from_vec(vec![1, 2]).unwrap();
        assert_eq!(*list.first(), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn map_transforms_success_only() {
        let valid: Validated<i32, &str> = Validated::valid(2);
        assert_eq!(valid.map(|n| n * 10), Validated::valid(20));

        let invalid: Validated<i32, &str> = Validated::invalid("boom");
        assert_eq!(invalid.map(|n| n * 10), Validated::invalid("boom"));
    }

    #[test]
    fn zip_combines_successes() {
        let left: Validated<i32, &str> = Validated::valid(1);
        let right: Validated<&str, &str> = Validated::valid("x");
        assert_eq!(left.zip(right), Validated::valid((1, "x")));
    }

    #[test]
    fn zip_accumulates_failures_left_to_right() {
        let left: Validated<i32, &str> = Validated::invalid("first");
        let right: Validated<i32, &str> = Validated::invalid("second");
        match left.zip(right) {
            Validated::Invalid(errors) => {
                assert_eq!(errors.into_vec(), vec!["first", "second"]);
            }
            Validated::Valid(_) => panic!("expected accumulated failure"),
        }
    }

    #[test]
    fn zip_keeps_single_failure_when_other_side_is_valid() {
        let failing: Validated<i32, &str> = Validated::invalid("only");
        let passing: Validated<i32, &str> = Validated::valid(7);
        match failing.zip(passing) {
            Validated::Invalid(errors) => assert_eq!(errors.into_vec(), vec!["only"]),
            Validated::Valid(_) => panic!("expected failure"),
        }

        let passing: Validated<i32, &str> = Validated::valid(7);
        let failing: Validated<i32, &str> = Validated::invalid("only");
        match passing.zip(failing) {
            Validated::Invalid(errors) => assert_eq!(errors.into_vec(), vec!["only"]),
            Validated::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn three_way_zip_concatenates_in_input_order() {
        let a: Validated<i32, &str> = Validated::invalid("a");
        let b: Validated<i32, &str> = Validated::valid(1);
        let mut c_errors = NonEmptyList::new("c1");
        c_errors.push("c2");
        let c: Validated<i32, &str> = Validated::invalid_all(c_errors);

        match a.zip(b).zip(c) {
            Validated::Invalid(errors) => {
                assert_eq!(errors.into_vec(), vec!["a", "c1", "c2"]);
            }
            Validated::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn into_result_round_trips_both_branches() {
        let valid: Validated<i32, &str> = Validated::valid(3);
        assert_eq!(valid.into_result(), Ok(3));

        let invalid: Validated<i32, &str> = Validated::invalid("bad");
        let errors = invalid.into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(*errors.first(), "bad");
    }
}
