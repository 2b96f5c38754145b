pub(super) mod native {
    use crate::error::{ErrorKind, PResult};

    pub fn sum(args: &[i64]) -> PResult<i64> {
        args.iter()
            .try_fold(0i64, |acc, v| acc.checked_add(*v))
            .ok_or(ErrorKind::Overflow)
    }

    // The mean is taken in floating point and truncated toward zero.
    pub fn average(args: &[i64]) -> PResult<i64> {
        if args.is_empty() {
            return Err(ErrorKind::EmptyArgumentList);
        }
        let total = sum(args)?;
        Ok((total as f64 / args.len() as f64) as i64)
    }
}

#[cfg(test)]
mod test {
    use super::native;
    use crate::error::ErrorKind;

    #[test]
    fn sum() {
        assert_eq!(native::sum(&[]), Ok(0));
        assert_eq!(native::sum(&[1, 2, 3]), Ok(6));
        assert_eq!(native::sum(&[i64::MAX, 1]), Err(ErrorKind::Overflow));
    }

    #[test]
    fn average_truncates() {
        assert_eq!(native::average(&[1, 2, 3, 4]), Ok(2));
        assert_eq!(native::average(&[-1, -2]), Ok(-1));
        assert_eq!(native::average(&[7]), Ok(7));
    }

    #[test]
    fn average_without_arguments() {
        assert_eq!(native::average(&[]), Err(ErrorKind::EmptyArgumentList));
    }
}
