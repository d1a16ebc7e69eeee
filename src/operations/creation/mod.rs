mod draw_vertex;

pub use draw_vertex::DrawVertex;
