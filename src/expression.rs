//! The closed set of face expressions.
//!
//! Every animation the engine can play is one of these variants. Callers
//! that receive expression requests as text (serial commands, scripts)
//! resolve them through [`Expression::from_name`]; an unknown name is a
//! contract violation and fails closed with
//! [`FaceError::InvalidExpression`].

use crate::error::FaceError;

/// A named face expression.
///
/// `Happy` and `Cute` form the "happy family": rendering either one arms a
/// flag that suppresses `Upset` until the face returns to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Resting open eyes; the shape every animation departs from.
    Normal,
    /// Fully closed eyes; also the lead-in of the directional looks.
    Close,
    Sad,
    Angry,
    Suspicious,
    Happy,
    Cute,
    Upset,
    /// Widen-then-narrow double take.
    Wonder,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    /// Caption frame introducing the robot by name.
    IntroduceSelf,
    /// Caption frame crediting the build team.
    CreditTeam,
}

impl Expression {
    /// Every expression, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Normal,
        Self::Close,
        Self::Sad,
        Self::Angry,
        Self::Suspicious,
        Self::Happy,
        Self::Cute,
        Self::Upset,
        Self::Wonder,
        Self::LookUp,
        Self::LookDown,
        Self::LookLeft,
        Self::LookRight,
        Self::IntroduceSelf,
        Self::CreditTeam,
    ];

    /// Stable lowercase name, used for text lookup and logging.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Close => "close",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Suspicious => "suspicious",
            Self::Happy => "happy",
            Self::Cute => "cute",
            Self::Upset => "upset",
            Self::Wonder => "wonder",
            Self::LookUp => "look-up",
            Self::LookDown => "look-down",
            Self::LookLeft => "look-left",
            Self::LookRight => "look-right",
            Self::IntroduceSelf => "introduce-self",
            Self::CreditTeam => "credit-team",
        }
    }

    /// Resolve an expression from its [`name`](Self::name).
    ///
    /// Fails closed: an unrecognized name yields
    /// [`FaceError::InvalidExpression`] and nothing is rendered.
    pub fn from_name(name: &str) -> Result<Self, FaceError> {
        Self::ALL
            .iter()
            .copied()
            .find(|expression| expression.name() == name)
            .ok_or_else(|| FaceError::invalid_expression(name))
    }

    /// Whether this expression arms the happy-state flag on completion.
    pub const fn is_happy_family(self) -> bool {
        matches!(self, Self::Happy | Self::Cute)
    }
}

impl core::fmt::Display for Expression {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Expression {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_round_trip() {
        for expression in Expression::ALL {
            assert_eq!(
                Expression::from_name(expression.name()),
                Ok(expression),
                "Name '{}' should resolve back to its variant",
                expression.name()
            );
        }
    }

    #[test]
    fn test_all_names_unique() {
        for (i, a) in Expression::ALL.iter().enumerate() {
            for b in &Expression::ALL[i + 1..] {
                assert_ne!(a.name(), b.name(), "Duplicate expression name");
            }
        }
    }

    #[test]
    fn test_unknown_name_fails_closed() {
        let err = Expression::from_name("grumpy").unwrap_err();
        assert_eq!(err, FaceError::invalid_expression("grumpy"));
    }

    #[test]
    fn test_from_str_matches_from_name() {
        let parsed: Expression = "look-left".parse().unwrap();
        assert_eq!(parsed, Expression::LookLeft);
        assert!("LOOK-LEFT".parse::<Expression>().is_err(), "Lookup is case sensitive");
    }

    #[test]
    fn test_happy_family_membership() {
        for expression in Expression::ALL {
            let expected = matches!(expression, Expression::Happy | Expression::Cute);
            assert_eq!(
                expression.is_happy_family(),
                expected,
                "Happy family flag wrong for {expression}"
            );
        }
    }
}
