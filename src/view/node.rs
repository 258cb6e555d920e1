//! The rendered view tree.
//!
//! A `View` is plain data: elements tagged with a semantic [`Role`], an
//! optional cosmetic class string and ordered children. Hosts (terminal,
//! text, HTML, JSON) interpret it; nothing in here knows how it will be
//! displayed.

use serde::Serialize;

/// Identifies one top-level dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Metrics,
    Pipeline,
    Keywords,
    Comparison,
    Insights,
    TechStack,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Metrics => "metrics",
            SectionId::Pipeline => "pipeline",
            SectionId::Keywords => "keywords",
            SectionId::Comparison => "comparison",
            SectionId::Insights => "insights",
            SectionId::TechStack => "tech_stack",
        }
    }
}

/// What an element means, independent of how a host draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dashboard,
    Section(SectionId),
    /// Side-by-side group of sections.
    Columns,
    Badge,
    Title,
    Subtitle,
    Heading,
    Paragraph,
    Tag,
    TagList,
    Bullet,
    MetricCard,
    MetricLabel,
    MetricValue,
    MetricSublabel,
    StepList,
    Step,
    StepIndex,
    StepTitle,
    StepBody,
    KeywordList,
    KeywordRow,
    KeywordName,
    KeywordDrop,
    Meter,
    Table,
    TableHead,
    TableBody,
    TableRow,
    HeaderCell,
    DataCell,
    List,
    ListItem,
    Strong,
    Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Direct element children, in order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of every descendant.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Text of direct `Text` children only.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(s) => Some(s.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Depth-first, pre-order search for every descendant with `role`.
    pub fn find_all(&self, role: Role) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if el.role == role {
                out.push(el);
            }
        });
        out
    }

    pub fn first(&self, role: Role) -> Option<&Element> {
        self.elements().find_map(|el| {
            if el.role == role {
                Some(el)
            } else {
                el.first(role)
            }
        })
    }

    pub fn count(&self, role: Role) -> usize {
        self.find_all(role).len()
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        for el in self.elements() {
            visit(el);
            el.walk(visit);
        }
    }
}

/// The complete rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    root: Element,
}

impl View {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn section(&self, id: SectionId) -> Option<&Element> {
        self.root.first(Role::Section(id))
    }

    /// Section ids in document order.
    pub fn section_order(&self) -> Vec<SectionId> {
        let mut out = Vec::new();
        self.root.walk(&mut |el| {
            if let Role::Section(id) = el.role {
                out.push(id);
            }
        });
        out
    }
}
