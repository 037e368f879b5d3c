use std::fmt::{Display, Formatter, Result as FmtResult};

/// Displays an integer with dots as thousands separator, e.g. `12.345`.
pub struct WithDots<N> {
    num: N,
}

impl<N> WithDots<N> {
    pub fn new(num: N) -> Self {
        Self { num }
    }
}

macro_rules! impl_with_dots {
    ( $( $ty:ty ),* ) => {
        $(
            impl Display for WithDots<$ty> {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    // Reversing the triples may exceed the input type
                    let mut n = self.num as u64;
                    let mut rev = 0_u64;
                    let mut triples = 0;

                    while n > 0 {
                        rev = rev * 1000 + n % 1000;
                        n /= 1000;
                        triples += 1;
                    }

                    if triples == 0 {
                        return f.write_str("0");
                    }

                    write!(f, "{}", rev % 1000)?;

                    for _ in 0..triples - 1 {
                        rev /= 1000;
                        write!(f, ".{:0>3}", rev % 1000)?;
                    }

                    Ok(())
                }
            }
        )*
    };
}

impl_with_dots!(u16, u32);

/// Euro amount without cents, e.g. `€ 12.345`.
pub struct Currency(pub u32);

impl Display for Currency {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "€ {}", WithDots::new(self.0))
    }
}

/// RDW reports engine power in kW.
pub fn kw_to_horsepower(kw: f32) -> u32 {
    (kw * 1.362).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_dots() {
        assert_eq!(WithDots::new(0_u32).to_string(), "0");
        assert_eq!(WithDots::new(999_u32).to_string(), "999");
        assert_eq!(WithDots::new(1000_u32).to_string(), "1.000");
        assert_eq!(WithDots::new(1_002_003_u32).to_string(), "1.002.003");
        assert_eq!(WithDots::new(u32::MAX).to_string(), "4.294.967.295");
    }

    #[test]
    fn currency() {
        assert_eq!(Currency(25_950).to_string(), "€ 25.950");
    }

    #[test]
    fn horsepower() {
        assert_eq!(kw_to_horsepower(110.0), 150);
        assert_eq!(kw_to_horsepower(0.0), 0);
    }
}
