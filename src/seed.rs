//! Demo catalogue loaded at startup so a fresh server has something to
//! study. Disable with SEED_DEMO_DATA=false.

use chrono::Utc;
use uuid::Uuid;

use crate::models::deck::{Card, Deck};

fn card(front: &str, back: &str) -> Card {
    Card {
        id: Uuid::new_v4().to_string(),
        front: front.to_string(),
        back: back.to_string(),
    }
}

fn deck(title: &str, description: &str, cards: Vec<Card>) -> Deck {
    let now = Utc::now();
    Deck {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        cards,
        created_at: now,
        updated_at: now,
    }
}

pub fn demo_decks() -> Vec<Deck> {
    vec![
        deck(
            "React Basics",
            "Fundamental concepts of React development",
            vec![
                card(
                    "What is JSX?",
                    "A syntax extension for JavaScript used with React",
                ),
                card(
                    "What is a component?",
                    "A reusable piece of UI that returns JSX",
                ),
                card(
                    "What is state in React?",
                    "Data that changes over time and triggers re-renders",
                ),
            ],
        ),
        deck(
            "JavaScript Trivia",
            "Essential JavaScript concepts and trivia",
            vec![
                card(
                    "What is hoisting?",
                    "Moving declarations to the top of scope during compile phase",
                ),
                card("What is a closure?", "A function plus its lexical scope"),
                card(
                    "What is event loop?",
                    "The mechanism that handles call stack and the task queues",
                ),
            ],
        ),
        deck(
            "Database Concepts",
            "Core database concepts and terminology",
            vec![
                card(
                    "What is normalization?",
                    "Organizing data to reduce redundancy",
                ),
                card(
                    "SQL vs NoSQL?",
                    "Relational with schemas vs non-relational and flexible schemas",
                ),
                card("What is an index?", "A data structure that speeds up reads"),
            ],
        ),
        deck(
            "React Interview Fundamentals",
            "Essential React concepts and questions commonly asked in interviews",
            vec![
                card(
                    "How does React's Concurrent Features improve performance?",
                    "Enables time-slicing, interruptible rendering, automatic batching, and Suspense for data fetching. Allows React to pause, resume, and prioritize updates for better UX.",
                ),
                card(
                    "When would you use useMemo vs useCallback vs React.memo?",
                    "useMemo: expensive calculations. useCallback: stable function references for child props. React.memo: prevent re-renders of components with same props. Each targets different optimization scenarios.",
                ),
                card(
                    "Explain the difference between useLayoutEffect and useEffect.",
                    "useLayoutEffect runs synchronously after DOM mutations but before browser paint. useEffect runs asynchronously after paint. Use useLayoutEffect for DOM measurements to prevent flicker.",
                ),
                card(
                    "What are React Server Components and their benefits?",
                    "Components that run on the server, reducing bundle size, enabling server-side data fetching, and improving performance. They complement client components for hybrid rendering strategies.",
                ),
                card(
                    "How would you optimize a large list with thousands of items?",
                    "Use react-window/react-virtualized for virtualization, implement infinite scrolling, memoize list items, use keys properly, and consider server-side pagination with search/filtering.",
                ),
                card(
                    "Explain different code-splitting strategies in React.",
                    "Route-based: React.lazy() with dynamic imports. Component-based: Split heavy components. Third-party: Separate vendor bundles. Use Suspense for loading states and error boundaries.",
                ),
                card(
                    "What are the core Web Vitals and how to optimize them?",
                    "LCP (Largest Contentful Paint): optimize images, reduce server response time. FID (First Input Delay): minimize JS blocking. CLS (Cumulative Layout Shift): reserve space for dynamic content.",
                ),
                card(
                    "How does tree shaking work and how to optimize it?",
                    "Eliminates dead code by analyzing ES6 import/export. Optimize: use ES modules, avoid default exports for libraries, configure webpack/rollup properly, use production builds.",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_decks_are_well_formed() {
        let decks = demo_decks();
        assert_eq!(decks.len(), 4);

        let mut ids = HashSet::new();
        for deck in &decks {
            assert!(ids.insert(deck.id.clone()), "duplicate deck id");
            assert!(!deck.title.trim().is_empty());
            assert!(!deck.cards.is_empty());
            assert!(deck.updated_at >= deck.created_at);

            let mut card_ids = HashSet::new();
            for card in &deck.cards {
                assert!(card_ids.insert(card.id.clone()), "duplicate card id");
                assert!(!card.front.trim().is_empty());
                assert!(!card.back.trim().is_empty());
            }
        }
    }
}
