mod category_props;
mod filter_props;
