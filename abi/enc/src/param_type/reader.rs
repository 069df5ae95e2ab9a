#[cfg(not(feature = "std"))]
use crate::no_std_prelude::*;
use crate::{Error, ParamType, Result};

pub(super) fn read(s: &str) -> Result<ParamType> {
    let s = s.trim();

    if let Some(stripped) = s.strip_suffix(']') {
        let open = stripped
            .rfind('[')
            .ok_or_else(|| Error::InvalidType(s.to_owned()))?;
        let elem = Box::new(read(&stripped[..open])?);
        return array_of(elem, &stripped[open + 1..], s);
    }

    if let Some(body) = s.strip_prefix('(') {
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| Error::InvalidType(s.to_owned()))?;
        let fields = split_fields(body)
            .ok_or_else(|| Error::InvalidType(s.to_owned()))?
            .into_iter()
            .map(read)
            .collect::<Result<Vec<_>>>()?;
        return Ok(ParamType::tuple(fields));
    }

    read_elementary(s)
}

pub(super) fn read_with_components(
    s: &str,
    components: Vec<(String, ParamType)>,
) -> Result<ParamType> {
    let s = s.trim();
    let Some(mut suffix) = s.strip_prefix("tuple") else {
        return read(s);
    };

    let mut ty = ParamType::Tuple(components);
    while !suffix.is_empty() {
        let rest = suffix
            .strip_prefix('[')
            .ok_or_else(|| Error::InvalidType(s.to_owned()))?;
        let close = rest
            .find(']')
            .ok_or_else(|| Error::InvalidType(s.to_owned()))?;
        ty = array_of(Box::new(ty), &rest[..close], s)?;
        suffix = &rest[close + 1..];
    }
    Ok(ty)
}

fn array_of(elem: Box<ParamType>, size: &str, full: &str) -> Result<ParamType> {
    if size.is_empty() {
        return Ok(ParamType::Array(elem));
    }
    let len = size
        .parse::<usize>()
        .map_err(|_| Error::InvalidType(full.to_owned()))?;
    Ok(ParamType::FixedArray(elem, len))
}

/// Splits a tuple body on its top level commas.
fn split_fields(body: &str) -> Option<Vec<&str>> {
    if body.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut fields = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (pos, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                fields.push(&body[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    fields.push(&body[start..]);
    Some(fields)
}

fn read_elementary(s: &str) -> Result<ParamType> {
    let ty = match s {
        "address" => ParamType::Address,
        "bool" => ParamType::Bool,
        "string" => ParamType::String,
        "bytes" => ParamType::Bytes,
        "byte" => ParamType::FixedBytes(1),
        "int" => ParamType::Int(256),
        "uint" => ParamType::Uint(256),
        "function" => return Err(Error::UnsupportedType(s.to_owned())),
        _ if s.starts_with("fixed") || s.starts_with("ufixed") => {
            return Err(Error::UnsupportedType(s.to_owned()))
        }
        _ => {
            if let Some(len) = s.strip_prefix("bytes") {
                ParamType::FixedBytes(parse_size(len, s)?)
            } else if let Some(bits) = s.strip_prefix("uint") {
                ParamType::Uint(parse_size(bits, s)?)
            } else if let Some(bits) = s.strip_prefix("int") {
                ParamType::Int(parse_size(bits, s)?)
            } else {
                return Err(Error::InvalidType(s.to_owned()));
            }
        }
    };

    ty.validate().map_err(|_| Error::InvalidType(s.to_owned()))?;
    Ok(ty)
}

fn parse_size(digits: &str, full: &str) -> Result<usize> {
    // reject signs and leading zeros, `uint08` is not a type
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidType(full.to_owned()));
    }
    digits
        .parse()
        .map_err(|_| Error::InvalidType(full.to_owned()))
}

#[cfg(test)]
mod tests {
    use crate::{Error, ParamType};

    #[test]
    fn test_read_param() {
        assert_eq!(ParamType::parse("address").unwrap(), ParamType::Address);
        assert_eq!(ParamType::parse("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(ParamType::parse("bytes32").unwrap(), ParamType::FixedBytes(32));
        assert_eq!(ParamType::parse("bool").unwrap(), ParamType::Bool);
        assert_eq!(ParamType::parse("string").unwrap(), ParamType::String);
        assert_eq!(ParamType::parse("int64").unwrap(), ParamType::Int(64));
        assert_eq!(ParamType::parse("uint8").unwrap(), ParamType::Uint(8));
    }

    #[test]
    fn aliases_normalize() {
        assert_eq!(ParamType::parse("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("int").unwrap(), ParamType::Int(256));
        assert_eq!(ParamType::parse("byte").unwrap(), ParamType::FixedBytes(1));
        assert_eq!(ParamType::parse("uint[]").unwrap().to_string(), "uint256[]");
    }

    #[test]
    fn test_read_array_param() {
        assert_eq!(
            ParamType::parse("address[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Address))
        );
        assert_eq!(
            ParamType::parse("uint256[3]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 3)
        );
        assert_eq!(
            ParamType::parse("bool[][2]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Array(Box::new(ParamType::Bool))), 2)
        );
        assert_eq!(
            ParamType::parse("uint8[2][]").unwrap(),
            ParamType::Array(Box::new(ParamType::FixedArray(Box::new(ParamType::Uint(8)), 2)))
        );
    }

    #[test]
    fn test_read_tuple_param() {
        assert_eq!(
            ParamType::parse("(address,bool)").unwrap(),
            ParamType::tuple([ParamType::Address, ParamType::Bool])
        );
        assert_eq!(
            ParamType::parse("(uint256,(string,bytes32[]))[2]").unwrap(),
            ParamType::FixedArray(
                Box::new(ParamType::tuple([
                    ParamType::Uint(256),
                    ParamType::tuple([
                        ParamType::String,
                        ParamType::Array(Box::new(ParamType::FixedBytes(32))),
                    ]),
                ])),
                2
            )
        );
        assert_eq!(ParamType::parse("()").unwrap(), ParamType::tuple([]));
    }

    #[test]
    fn components_build_tuples() {
        let fields = vec![
            ("a".to_string(), ParamType::Uint(256)),
            ("b".to_string(), ParamType::String),
        ];
        let ty = ParamType::from_components("tuple[2][]", fields.clone()).unwrap();
        assert_eq!(
            ty,
            ParamType::Array(Box::new(ParamType::FixedArray(
                Box::new(ParamType::Tuple(fields.clone())),
                2
            )))
        );
        assert_eq!(
            ParamType::from_components("uint8", fields).unwrap(),
            ParamType::Uint(8)
        );
    }

    #[test]
    fn rejects_bad_type_strings() {
        for bad in ["uint7", "uint264", "uint08", "bytes0", "bytes33", "foo", "(uint8", "uint8[x]", "(a))"] {
            assert!(
                matches!(ParamType::parse(bad), Err(Error::InvalidType(_))),
                "{bad} should not parse"
            );
        }
        assert!(matches!(ParamType::parse("function"), Err(Error::UnsupportedType(_))));
        assert!(matches!(ParamType::parse("fixed128x18"), Err(Error::UnsupportedType(_))));
    }
}
