use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::io::error::Error;
use crate::model::molecule::Molecule;
use crate::model::types::Element;

/// Parses a condensed formula with an optional trailing charge.
///
/// Accepted charge forms are `NH4+`, `NO3-`, `SO4-2` (sign then magnitude),
/// and `SO4^2-` or `SO4 2-` (magnitude then sign after a separator).
pub fn parse_formula(formula: &str) -> Result<Molecule, Error> {
    let text = formula.trim();
    if text.is_empty() {
        return Err(Error::EmptyFormula);
    }

    let (body, charge) = split_charge(text)?;

    let mut molecule = Molecule::new().with_charge(charge);
    let mut chars = body.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        if !ch.is_ascii_uppercase() {
            return Err(Error::UnexpectedCharacter { ch, position });
        }

        let mut symbol = String::from(ch);
        if let Some(&(_, next)) = chars.peek() {
            if next.is_ascii_lowercase() {
                symbol.push(next);
                chars.next();
            }
        }

        let element = Element::from_str(&symbol)
            .map_err(|_| Error::unsupported_element(symbol.as_str(), position))?;
        let count = parse_count(&mut chars)?;
        molecule
            .add(element, count)
            .map_err(|e| Error::invalid_count(position, e.to_string()))?;
    }

    if molecule.is_empty() {
        return Err(Error::NoElements(text.to_string()));
    }

    Ok(molecule)
}

impl FromStr for Molecule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

fn parse_count(chars: &mut Peekable<CharIndices<'_>>) -> Result<u32, Error> {
    let Some(&(start, first)) = chars.peek() else {
        return Ok(1);
    };
    if !first.is_ascii_digit() {
        return Ok(1);
    }

    let mut count: u32 = 0;
    while let Some(&(_, ch)) = chars.peek() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        count = count
            .checked_mul(10)
            .and_then(|c| c.checked_add(digit))
            .ok_or_else(|| Error::invalid_count(start, "count is too large"))?;
        chars.next();
    }

    if count == 0 {
        return Err(Error::invalid_count(start, "count must be at least 1"));
    }
    Ok(count)
}

fn split_charge(text: &str) -> Result<(&str, i32), Error> {
    if let Some((body, suffix)) = text.rsplit_once('^') {
        return Ok((body.trim_end(), parse_magnitude_then_sign(suffix)?));
    }
    if let Some((body, suffix)) = text.rsplit_once(char::is_whitespace) {
        return Ok((body.trim_end(), parse_magnitude_then_sign(suffix)?));
    }

    if let Some(body) = text.strip_suffix('+') {
        return Ok((body, 1));
    }
    if let Some(body) = text.strip_suffix('-') {
        return Ok((body, -1));
    }

    let digits_start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    if let Some(start) = digits_start {
        let head = &text[..start];
        let sign = if head.ends_with('+') {
            1
        } else if head.ends_with('-') {
            -1
        } else {
            return Ok((text, 0));
        };
        let magnitude = parse_magnitude(&text[start..])?;
        return Ok((&head[..head.len() - 1], sign * magnitude));
    }

    Ok((text, 0))
}

fn parse_magnitude_then_sign(suffix: &str) -> Result<i32, Error> {
    let suffix = suffix.trim();
    let (digits, sign) = if let Some(d) = suffix.strip_suffix('+') {
        (d, 1)
    } else if let Some(d) = suffix.strip_suffix('-') {
        (d, -1)
    } else {
        return Err(Error::InvalidCharge(format!(
            "'{}' must end with '+' or '-'",
            suffix
        )));
    };

    if digits.is_empty() {
        return Ok(sign);
    }
    Ok(sign * parse_magnitude(digits)?)
}

fn parse_magnitude(digits: &str) -> Result<i32, Error> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidCharge(format!(
            "'{}' is not a charge magnitude",
            digits
        )));
    }
    digits
        .parse::<i32>()
        .map_err(|_| Error::InvalidCharge(format!("'{}' is out of range", digits)))
}
