//! I define the few datatype IRIs that the term model itself relies on.
//!
//! This is *not* a namespace-prefix facility;
//! only the constants required by [`Term`](crate::term::Term)
//! implementations live here.

/// Constants from the `rdf:` vocabulary.
pub mod rdf {
    use crate::term::IriRef;

    /// The datatype of all language-tagged strings.
    pub const LANG_STRING: IriRef<&str> =
        IriRef::new_unchecked_const("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
}

/// Constants from the `xsd:` vocabulary.
pub mod xsd {
    use crate::term::IriRef;

    /// The datatype of plain string literals.
    pub const STRING: IriRef<&str> =
        IriRef::new_unchecked_const("http://www.w3.org/2001/XMLSchema#string");

    /// The datatype of integer literals.
    pub const INTEGER: IriRef<&str> =
        IriRef::new_unchecked_const("http://www.w3.org/2001/XMLSchema#integer");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::IriRef;

    #[test]
    fn all_valid() {
        for iri in [
            rdf::LANG_STRING.as_str(),
            xsd::STRING.as_str(),
            xsd::INTEGER.as_str(),
        ] {
            assert!(IriRef::new(iri).is_ok());
        }
    }
}
