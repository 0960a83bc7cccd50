/// A module for providing error context

/// An error (E), and some context
pub struct ErrorContext<E>(pub String, pub E);

/// Creating a trait to extend an API by adding a context. method.
pub trait ErrorContextExt<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>>;
}

impl<T, E> ErrorContextExt<T, E> for Result<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>> {
        let s = c.as_ref();
        self.map_err(|e| ErrorContext(s.into(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_should_wrap_the_error_with_the_message() {
        let res: Result<(), &str> = Err("boom");
        let ErrorContext(context, source) = res.context("while testing").unwrap_err();
        assert_eq!(context, "while testing");
        assert_eq!(source, "boom");
    }

    #[test]
    fn context_should_leave_ok_values_untouched() {
        let res: Result<u8, &str> = Ok(7);
        assert_eq!(res.context(format!("attempt {}", 1)).ok(), Some(7));
    }
}
