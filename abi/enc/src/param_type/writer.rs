use core::fmt;

use super::ParamType;

/// Canonical form, as used in function and event signatures.
impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(len) => write!(f, "bytes{len}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::FixedArray(elem, len) => write!(f, "{elem}[{len}]"),
            ParamType::Array(elem) => write!(f, "{elem}[]"),
            ParamType::Tuple(fields) => {
                f.write_str("(")?;
                for (i, (_, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ParamType;

    #[test]
    fn test_write_param() {
        assert_eq!(ParamType::Address.to_string(), "address");
        assert_eq!(ParamType::Bytes.to_string(), "bytes");
        assert_eq!(ParamType::FixedBytes(32).to_string(), "bytes32");
        assert_eq!(ParamType::Uint(256).to_string(), "uint256");
        assert_eq!(ParamType::Int(64).to_string(), "int64");
        assert_eq!(ParamType::Bool.to_string(), "bool");
        assert_eq!(ParamType::String.to_string(), "string");
        assert_eq!(ParamType::Array(Box::new(ParamType::Bool)).to_string(), "bool[]");
        assert_eq!(
            ParamType::FixedArray(Box::new(ParamType::String), 2).to_string(),
            "string[2]"
        );
        assert_eq!(
            ParamType::FixedArray(Box::new(ParamType::Array(Box::new(ParamType::Bool))), 2)
                .to_string(),
            "bool[][2]"
        );
    }

    #[test]
    fn tuples_drop_field_names() {
        let ty = ParamType::Array(Box::new(ParamType::Tuple(vec![
            ("owner".into(), ParamType::Address),
            (
                "inner".into(),
                ParamType::tuple([ParamType::Uint(8), ParamType::Bytes]),
            ),
        ])));
        assert_eq!(ty.to_string(), "(address,(uint8,bytes))[]");
    }
}
