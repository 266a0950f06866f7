use std::fs;
use std::path::PathBuf;

use goerd_collect::{CollectOptions, Registry, collect_paths};
use goerd_core::{Declaration, Field, TypeExpr};
use goerd_dot::{RenderOptions, render, render_to};
use pretty_assertions::assert_eq;
use tempfile::{TempDir, tempdir};
use textwrap::dedent;

/// Write one Go package per `(dir, source)` pair and collect them all.
fn collect(packages: &[(&str, &str)]) -> (TempDir, Registry) {
    let temp = tempdir().unwrap();
    let mut dirs: Vec<PathBuf> = Vec::new();
    for (dir, source) in packages {
        let path = temp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("types.go"), dedent(source)).unwrap();
        dirs.push(path);
    }
    let (registry, _) = collect_paths(dirs.as_slice(), CollectOptions::default()).unwrap();
    (temp, registry)
}

fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines()
        .map(str::trim)
        .filter(|line| line.contains(" -> "))
        .collect()
}

fn node_lines(dot: &str) -> Vec<&str> {
    dot.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("\"node-") && line.contains("[shape="))
        .collect()
}

#[test]
fn struct_without_known_references_has_no_edges() {
    let (_temp, registry) = collect(&[(
        "geo",
        "
        package geo

        type Point struct {
            X, Y int
        }
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        rendered.dot,
        concat!(
            "digraph \"GoERD\" {\n",
            "  subgraph \"cluster_geo\" {\n",
            "    label=\"geo\";\n",
            "    \"node-geo.Point\" [shape=record,label=\"{Point|<f0>X,\\ Y\\ int}\"];\n",
            "  }\n",
            "}\n",
        )
    );
    assert_eq!(rendered.stats.nodes, 1);
    assert_eq!(rendered.stats.edges, 0);
}

#[test]
fn function_type_links_to_declared_parameter() {
    let (_temp, registry) = collect(&[(
        "geo",
        "
        package geo

        type Point struct{ X, Y int }

        type Handler func(Point) error
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        node_lines(&rendered.dot)[0],
        "\"node-geo.Handler\" [shape=rectangle,label=\"Handler\\ func\\(Point\\)\\ \\(error\\)\"];"
    );
    assert_eq!(
        edge_lines(&rendered.dot),
        vec!["\"node-geo.Handler\":f0 -> \"node-geo.Point\";"]
    );
}

#[test]
fn interface_edges_come_only_from_known_references() {
    let (_temp, registry) = collect(&[(
        "store",
        "
        package store

        type Item struct{ Name string }

        type Repo interface {
            Get(id string) (*Item, error)
            Put(item Missing) error
        }
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert!(rendered.dot.contains(
        "\"node-store.Repo\" [shape=Mrecord,label=\"{Repo\\ interface|<f0>Get\\ func\\(string\\)\\ \\(\\*Item,\\ error\\)|<f1>Put\\ func\\(Missing\\)\\ \\(error\\)}\"];"
    ));
    assert_eq!(
        edge_lines(&rendered.dot),
        vec!["\"node-store.Repo\":f0 -> \"node-store.Item\";"]
    );
}

#[test]
fn same_name_in_two_packages_resolves_by_qualifier() {
    let (_temp, registry) = collect(&[
        (
            "a",
            "
            package pkga

            type Config struct{ Debug bool }

            type Server struct {
                Local  Config
                Remote pkgb.Config
                Both   map[Config]*pkgb.Config
            }
            ",
        ),
        (
            "b",
            "
            package pkgb

            type Config struct{ Port int }
            ",
        ),
    ]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        edge_lines(&rendered.dot),
        vec![
            "\"node-pkga.Server\":f0 -> \"node-pkga.Config\";",
            "\"node-pkga.Server\":f1 -> \"node-pkgb.Config\";",
            "\"node-pkga.Server\":f2 -> \"node-pkga.Config\";",
            "\"node-pkga.Server\":f2 -> \"node-pkgb.Config\";",
        ]
    );
    assert_eq!(rendered.stats.packages, 2);
}

#[test]
fn channel_and_container_shapes() {
    let (_temp, registry) = collect(&[(
        "events",
        "
        package events

        type Event struct{}
        type Stream chan *Event
        type Batch []Event
        type ByID map[string]Event
        type Name string
        type Stamp time.Time
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        node_lines(&rendered.dot),
        vec![
            "\"node-events.Batch\" [shape=rectangle,label=\"Batch\\ \\[\\]Event\"];",
            "\"node-events.ByID\" [shape=rectangle,label=\"ByID\\ map\\[string\\]Event\"];",
            "\"node-events.Event\" [shape=record,label=\"{Event|}\"];",
            "\"node-events.Name\" [shape=ellipse,label=\"Name\\ string\"];",
            "\"node-events.Stamp\" [shape=ellipse,label=\"Stamp\\ time.Time\"];",
            "\"node-events.Stream\" [shape=box,label=\"Stream\\ chan\\ \\*Event\"];",
        ]
    );
    assert_eq!(
        edge_lines(&rendered.dot),
        vec!["\"node-events.Stream\":f0 -> \"node-events.Event\";"]
    );
}

#[test]
fn unsupported_declarations_are_skipped_not_fatal() {
    let (_temp, registry) = collect(&[(
        "graph",
        "
        package graph

        type Node struct{ Next Ref }
        type Ref *Node
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(rendered.stats.nodes, 1);
    assert_eq!(rendered.stats.skipped, vec!["graph.Ref".to_string()]);
    assert!(!rendered.dot.contains("\"node-graph.Ref\" ["));
    // The index still knows Ref, so the field edge is drawn.
    assert_eq!(
        edge_lines(&rendered.dot),
        vec!["\"node-graph.Node\":f0 -> \"node-graph.Ref\";"]
    );
}

#[test]
fn rendering_is_deterministic() {
    let sources = [
        ("z", "package zeta\ntype B struct{ A alpha.A }\ntype A func(B)\n"),
        ("a", "package alpha\ntype A interface{ Do(zeta.B) }\n"),
    ];
    let (_t1, first) = collect(&sources);
    let (_t2, second) = collect(&sources);

    let options = RenderOptions::default();
    let one = render(&first, &options).dot;
    assert_eq!(one, render(&second, &options).dot);
    assert_eq!(one, render(&first, &options).dot);

    let clusters: Vec<&str> = one
        .lines()
        .filter(|line| line.contains("subgraph"))
        .map(str::trim)
        .collect();
    assert_eq!(
        clusters,
        vec!["subgraph \"cluster_alpha\" {", "subgraph \"cluster_zeta\" {"]
    );
}

#[test]
fn render_to_writes_document_with_options() {
    let mut registry = Registry::new();
    registry.insert(
        "geo",
        Declaration::new(
            "Point",
            TypeExpr::Struct(vec![Field::new(vec!["X".into()], TypeExpr::ident("int"))]),
        ),
    );

    let options = RenderOptions::new()
        .with_graph_name("Types")
        .with_rankdir(Some("LR".into()));
    let mut out = Vec::new();
    let stats = render_to(&registry, &options, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("digraph \"Types\" {\n  rankdir=\"LR\";\n"));
    assert_eq!(stats.nodes, 1);
}

#[test]
fn raw_string_length_keeps_label_quoted() {
    let (_temp, registry) = collect(&[(
        "p",
        r#"
        package p

        // A comment mentioning type B struct{}
        type A [len(`\"`)]byte
        "#,
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        node_lines(&rendered.dot),
        vec![r#""node-p.A" [shape=rectangle,label="A\ \[len\(\`\\\"\`\)\]byte"];"#]
    );
}

#[test]
fn alias_declarations_are_labelled_with_equals() {
    let (_temp, registry) = collect(&[(
        "p",
        "
        package p

        type Named string
        type Same = string
        ",
    )]);

    let rendered = render(&registry, &RenderOptions::default());
    assert_eq!(
        node_lines(&rendered.dot),
        vec![
            "\"node-p.Named\" [shape=ellipse,label=\"Named\\ string\"];",
            "\"node-p.Same\" [shape=ellipse,label=\"Same\\ =\\ string\"];",
        ]
    );
}
