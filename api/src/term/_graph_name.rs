use super::*;

/// A [`GraphName`] is an optional [`Term`](super::Term),
/// used to name a graph in an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#section-dataset).
///
/// By convention, `None` is the "name" of the default graph.
pub type GraphName<T> = Option<T>;

/// Determine if two [`GraphName`]s represent the same RDF term.
pub fn graph_name_eq<T1: Term, T2: Term>(gn1: GraphName<T1>, gn2: GraphName<T2>) -> bool {
    match (gn1, gn2) {
        (Some(t1), Some(t2)) => t1.eq(t2),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn graph_name_eq_simple() {
        let g1 = ez_term("<tag:g1>");
        let g2 = ez_term("<tag:g1>");
        let g3 = ez_term("<tag:g3>");
        assert!(graph_name_eq(Some(&g1), Some(&g2)));
        assert!(!graph_name_eq(Some(&g1), Some(&g3)));
        assert!(graph_name_eq(None::<&SimpleTerm>, None::<&SimpleTerm>));
        assert!(!graph_name_eq(Some(&g1), None::<&SimpleTerm>));
        assert!(!graph_name_eq(None::<&SimpleTerm>, Some(&g1)));
    }
}
