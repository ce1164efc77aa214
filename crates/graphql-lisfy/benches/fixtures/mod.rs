use std::fmt::Write;

pub const SIMPLE_QUERY: &str = "{ viewer { login } }";

pub const VARIABLES_QUERY: &str = r#"query SearchRepositories(
  $query: String!,
  $first: Int = 25,
  $after: String,
  $orderBy: RepositoryOrder = {field: STARGAZERS, direction: DESC},
  $languages: [String!] = ["rust", "go", "typescript"]
) {
  search(query: $query, type: REPOSITORY, first: $first, after: $after) {
    repositoryCount
    edges { node { ... on Repository { nameWithOwner stargazerCount } } }
    pageInfo { endCursor hasNextPage }
  }
}
"#;

/// Generates an operation whose selection set nests `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{ id").unwrap();
    }
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a list value holding `count` small objects.
pub fn large_list_value(count: usize) -> String {
    let mut out = String::with_capacity(count * 48);
    out.push('[');
    for i in 0..count {
        write!(out, "{{id: {i}, name: \"item {i}\", ratio: {i}.5, tag: TAG_{i}}}, ").unwrap();
    }
    out.push(']');
    out
}
