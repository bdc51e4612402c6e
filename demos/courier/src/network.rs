//! The delivery map the courier demo runs on.
//!
//! Seven junctions laid out left to right, weights in centimetres as
//! measured on the physical track.  Seven simple routes lead from A to G.

use std::io::Cursor;

use dr_graph::{GraphResult, RouteGraph, load_graph_csv_readers};

const NODES_CSV: &str = "\
id,x,y\n\
A,100,250\n\
B,300,100\n\
C,300,400\n\
D,500,250\n\
E,700,100\n\
F,700,400\n\
G,900,250\n\
";

const EDGES_CSV: &str = "\
source,target,weight,label\n\
A,B,49,49cm\n\
A,C,65,65cm\n\
B,D,60,60cm\n\
C,D,62,62cm\n\
C,F,61,61cm\n\
B,E,64.5,\"64,5cm\"\n\
D,E,45,45cm\n\
F,G,55,55cm\n\
E,G,44,44cm\n\
";

/// Build the seven-node delivery map.
pub fn build_network() -> GraphResult<RouteGraph> {
    load_graph_csv_readers(Cursor::new(NODES_CSV), Cursor::new(EDGES_CSV))
}
