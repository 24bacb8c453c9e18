use proptest::prelude::*;
use std::collections::HashSet;
use toolbox_search::ToolCatalog;

proptest! {
    #[test]
    fn test_search_is_total_and_idempotent(query in "\\PC{0,16}") {
        let catalog = ToolCatalog::builtin();
        let first: Vec<_> = catalog.search_tools(&query).into_iter().map(|t| t.id()).collect();
        let second: Vec<_> = catalog.search_tools(&query).into_iter().map(|t| t.id()).collect();

        prop_assert_eq!(&first, &second);
        let unique: HashSet<_> = first.iter().collect();
        prop_assert_eq!(unique.len(), first.len());
        prop_assert!(first.iter().all(|id| catalog.get_tool_by_id(id).is_some()));
    }

    #[test]
    fn test_whitespace_queries_list_everything(query in "[ \t\n]{0,8}") {
        let catalog = ToolCatalog::builtin();
        let listed: Vec<_> = catalog.search_tools(&query).into_iter().map(|t| t.id()).collect();
        let sorted: Vec<_> = catalog.index().sorted().iter().map(|t| t.id()).collect();
        prop_assert_eq!(listed, sorted);
    }

    #[test]
    fn test_exact_tags_always_find_their_tool(index in 0usize..toolbox_registry::BUILTIN_COUNT) {
        let catalog = ToolCatalog::builtin();
        let tool = &catalog.registry().all()[index];
        for tag in tool.tags() {
            if tag.chars().count() < 2 {
                continue;
            }
            let found = catalog.search_tools(tag);
            prop_assert!(found.iter().any(|t| t.id() == tool.id()), "tag {} missed {}", tag, tool.id());
        }
    }
}
