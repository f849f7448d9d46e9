use compare::Compare;
use std::cmp::Ordering;

/// Whether position `i` starts a numeric run: a digit, or a `.` immediately
/// followed by a digit.
fn run_start(s: &[u8], i: usize) -> bool {
    match s[i] {
        b if b.is_ascii_digit() => true,
        b'.' => matches!(s.get(i + 1), Some(b) if b.is_ascii_digit()),
        _ => false,
    }
}

/// End of the maximal numeric run beginning at `i`. The run greedily
/// consumes digits and `.`, however many `.` occur; multi-dot runs are
/// sorted out by `RunValue::parse`.
fn run_end(s: &[u8], mut i: usize) -> usize {
    while i < s.len() && (s[i].is_ascii_digit() || s[i] == b'.') {
        i += 1;
    }
    i
}

/// A numeric run split at its decimal point, with leading zeros of the
/// integer part stripped. Values compare exactly at any length, so runs
/// longer than any machine integer never overflow.
struct RunValue<'a> {
    int: &'a [u8],
    frac: &'a [u8],
}

impl<'a> RunValue<'a> {
    /// `None` when `run` is not a single decimal, i.e. contains a second
    /// `.`. Leading- and trailing-dot runs (`".5"`, `"12."`) parse.
    fn parse(run: &'a [u8]) -> Option<Self> {
        let mut halves = run.splitn(2, |&b| b == b'.');
        let int = halves.next().unwrap_or(&[]);
        let frac = halves.next().unwrap_or(&[]);
        if frac.contains(&b'.') {
            return None;
        }
        let zeros = int.iter().take_while(|&&b| b == b'0').count();
        Some(Self {
            int: &int[zeros..],
            frac,
        })
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        // With leading zeros gone, more integer digits means a larger
        // value; at equal count the digits compare lexically.
        let ord = (self.int.len(), self.int).cmp(&(other.int.len(), other.int));
        if ord != Ordering::Equal {
            return ord;
        }
        // Fraction digits compare position by position; a missing
        // position counts as zero, so `1.5` and `1.50` are equal.
        for i in 0..self.frac.len().max(other.frac.len()) {
            let l = self.frac.get(i).copied().unwrap_or(b'0');
            let r = other.frac.get(i).copied().unwrap_or(b'0');
            if l != r {
                return l.cmp(&r);
            }
        }
        Ordering::Equal
    }
}

/// Compares two strings in natural order: characters compare by ordinal
/// value, but wherever both strings sit at a numeric run (digits and `.`)
/// the runs compare as decimal values, so `"file2"` sorts before
/// `"file10"`.
///
/// Runs with equal value order by literal length, putting zero-padded
/// forms after their plain spelling (`"v7"` before `"v007"`). A run that
/// is not a single decimal, such as `"1.2.3"`, is compared as its raw
/// literal text against the other run, and that result is final. When one
/// string is a prefix of the other, the shorter sorts first.
///
/// Total and deterministic for every input pairing; never panics.
///
/// Usage example:
///
/// ```
/// use natural_str::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("img9.png", "img10.png"), Ordering::Less);
/// assert_eq!(natural_cmp("v1.5", "v1.25"), Ordering::Greater);
/// assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
/// ```
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let (l, r) = (left.as_bytes(), right.as_bytes());
    let (mut li, mut ri) = (0, 0);

    while li < l.len() && ri < r.len() {
        if run_start(l, li) && run_start(r, ri) {
            let run_l = &l[li..run_end(l, li)];
            let run_r = &r[ri..run_end(r, ri)];
            li += run_l.len();
            ri += run_r.len();

            match (RunValue::parse(run_l), RunValue::parse(run_r)) {
                (Some(value_l), Some(value_r)) => {
                    let ord = value_l.cmp_value(&value_r);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    // Equal values: the longer literal (more leading
                    // zeros) sorts after the shorter.
                    let ord = run_l.len().cmp(&run_r.len());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    // Identical value and literal length; the runs tie
                    // and the scan continues past them.
                }
                // Either run failed to parse as a single decimal. The raw
                // literals decide, and the result stands even when they
                // are equal.
                _ => return run_l.cmp(run_r),
            }
        } else {
            let ord = l[li].cmp(&r[ri]);
            if ord != Ordering::Equal {
                return ord;
            }
            li += 1;
            ri += 1;
        }
    }

    // At least one side is exhausted with no difference found; the
    // shorter string sorts first.
    l.len().cmp(&r.len())
}

/// [`natural_cmp`] over optional strings. Absent orders before any present
/// string; two absents are equal.
///
/// Usage example:
///
/// ```
/// use natural_str::natural_cmp_opt;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp_opt(None, Some("x")), Ordering::Less);
/// assert_eq!(natural_cmp_opt(None, None), Ordering::Equal);
/// ```
pub fn natural_cmp_opt(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => natural_cmp(l, r),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Comparator form of [`natural_cmp`], for collections that are generic
/// over an ordering.
///
/// Usage example:
///
/// ```
/// use compare::Compare;
/// use natural_str::NaturalOrder;
///
/// assert!(NaturalOrder.compares_lt("file2", "file10"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl Compare<str> for NaturalOrder {
    fn compare(&self, l: &str, r: &str) -> Ordering {
        natural_cmp(l, r)
    }
}

impl Compare<String> for NaturalOrder {
    fn compare(&self, l: &String, r: &String) -> Ordering {
        natural_cmp(l, r)
    }
}

impl Compare<Option<String>> for NaturalOrder {
    fn compare(&self, l: &Option<String>, r: &Option<String>) -> Ordering {
        natural_cmp_opt(l.as_deref(), r.as_deref())
    }
}

#[cfg(test)]
mod natural_cmp_tests {
    use super::{natural_cmp, natural_cmp_opt, NaturalOrder};
    use compare::Compare;
    use std::cmp::Ordering;

    macro_rules! assert_cmp {
        ($l:expr, $r:expr, $ord:ident) => {
            assert_eq!(
                natural_cmp($l, $r),
                Ordering::$ord,
                "natural_cmp({:?}, {:?})",
                $l,
                $r
            );
        };
    }

    #[test]
    fn test_plain_text() {
        assert_cmp!("alpha", "beta", Less);
        assert_cmp!("beta", "alpha", Greater);
        assert_cmp!("alpha", "alpha", Equal);
        // Ordinal comparison is case sensitive; uppercase sorts first.
        assert_cmp!("ITEM3", "item1", Less);
    }

    #[test]
    fn test_null_ordering() {
        assert_eq!(natural_cmp_opt(None, None), Ordering::Equal);
        assert_eq!(natural_cmp_opt(None, Some("x")), Ordering::Less);
        assert_eq!(natural_cmp_opt(Some("x"), None), Ordering::Greater);
        assert_eq!(natural_cmp_opt(Some(""), None), Ordering::Greater);
        assert_eq!(natural_cmp_opt(Some("a"), Some("b")), Ordering::Less);
    }

    #[test]
    fn test_reflexive() {
        for s in ["", "a", "0", "007", "1.2.3", "...", "item10", "é"] {
            assert_cmp!(s, s, Equal);
        }
    }

    #[test]
    fn test_antisymmetric() {
        let samples = [
            "", "a", "A", "a1", "1a", "file2", "file10", "v007", "v7",
            "v1.5", "v1.25", "1.2.3", "1.2.4", "...", "12.", ".5", "0.5",
        ];
        for l in samples {
            for r in samples {
                assert_eq!(
                    natural_cmp(l, r),
                    natural_cmp(r, l).reverse(),
                    "asymmetry for {:?} vs {:?}",
                    l,
                    r
                );
            }
        }
    }

    #[test]
    fn test_numeric_runs() {
        assert_cmp!("file2", "file10", Less);
        assert_cmp!("img9.png", "img10.png", Less);
        assert_cmp!("2", "10", Less);
        assert_cmp!("a2b", "a10b", Less);
        // Equal runs tie and the scan continues into the suffix.
        assert_cmp!("a10b", "a10c", Less);
    }

    #[test]
    fn test_mode_switch() {
        // Digit against letter falls back to ordinal characters.
        assert_cmp!("a", "1", Greater);
        assert_cmp!("a1", "1a", Greater);
    }

    #[test]
    fn test_leading_zero_tie_break() {
        assert_cmp!("v007", "v7", Greater);
        assert_cmp!("v7", "v007", Less);
        assert_cmp!("file1", "file01", Less);
        // Equal value, equal literal length, different spelling.
        assert_cmp!("x01.", "x1.0", Equal);
    }

    #[test]
    fn test_decimal_runs() {
        assert_cmp!("v1.5", "v1.25", Greater);
        assert_cmp!("a1.02", "a1.1", Less);
        assert_cmp!("a1.5", "a1.50", Less); // equal value, shorter literal first
        assert_cmp!("a0.5z", "a.5z", Greater); // same, via leading zero
        assert_cmp!(".5", "0.4", Greater);
    }

    #[test]
    fn test_trailing_dot_run() {
        // "12." parses as 12; both runs tie, the suffix decides.
        assert_cmp!("a12.b", "a12.c", Less);
        assert_cmp!("a12.", "a12.0", Less);
    }

    #[test]
    fn test_multi_dot_fallback() {
        // Neither run parses as a single decimal, so the raw literals
        // compare ordinally.
        assert_cmp!("1.2.3", "1.2.4", Less);
        assert_cmp!("1.10.3", "1.2.3", Less); // ordinal, not version order
        // The fallback result is final even when the literals are equal.
        assert_cmp!("a1.2.3b", "a1.2.3z", Equal);
    }

    #[test]
    fn test_prefix_rule() {
        assert_cmp!("abc", "abcd", Less);
        assert_cmp!("abcd", "abc", Greater);
        assert_cmp!("", "a", Less);
        assert_cmp!("", "", Equal);
    }

    #[test]
    fn test_dots_only() {
        // Dots not followed by digits never enter a numeric run.
        assert_cmp!("...", "...", Equal);
        assert_cmp!("..", "...", Less);
    }

    #[test]
    fn test_long_runs() {
        let small = format!("n{}", "9".repeat(30));
        let large = format!("n1{}", "0".repeat(30));
        assert_cmp!(small.as_str(), large.as_str(), Less);
        assert_cmp!(large.as_str(), small.as_str(), Greater);
    }

    #[test]
    fn test_comparator() {
        assert!(NaturalOrder.compares_lt("file2", "file10"));
        assert_eq!(
            NaturalOrder.compare(&"v007".to_string(), &"v7".to_string()),
            Ordering::Greater
        );
        assert_eq!(
            NaturalOrder.compare(&None, &Some("x".to_string())),
            Ordering::Less
        );
    }
}
