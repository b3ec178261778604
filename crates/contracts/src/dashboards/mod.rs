pub mod d001_category_charts;
