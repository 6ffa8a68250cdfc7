/// Options of the isomorphism functions.
///
/// ```
/// # use bijou_isomorphism::IsoOptions;
/// let options = IsoOptions::new().with_canonical_literals().with_max_depth(8);
/// assert!(options.canonicalize_literals);
/// assert_eq!(options.max_depth, Some(8));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IsoOptions {
    /// If true, literals occurring in statements with blank nodes are compared by their
    /// [canonical lexical form](bijou_api::term::canonical),
    /// so that e.g. `"01"^^xsd:integer` and `"1"^^xsd:integer` are considered identical.
    ///
    /// Statements without blank nodes are always compared exactly.
    pub canonicalize_literals: bool,
    /// Maximum number of nested speculative pairings.
    ///
    /// When reached, the search branch fails,
    /// so graphs may be deemed non-isomorphic although they are.
    /// `None` (the default) means unlimited.
    pub max_depth: Option<usize>,
}

impl IsoOptions {
    /// Default options: exact literals, unlimited depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare literals by their canonical lexical form.
    pub fn with_canonical_literals(mut self) -> Self {
        self.canonicalize_literals = true;
        self
    }

    /// Limit the depth of the backtracking search.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Whether a search branch at the given `depth` may pin one more pair.
    pub(crate) fn may_recurse(&self, depth: usize) -> bool {
        self.max_depth.map(|max| depth < max).unwrap_or(true)
    }
}
